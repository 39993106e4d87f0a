use std::fmt;

/// A length as it appears in vector markup: either a plain number, or a raw
/// string such as `"2em"` that is passed through untouched.
///
/// Whole numbers print without a trailing `.0`, so `Dimension::from(24)`
/// renders as `width="24"` rather than `width="24.0"`.
#[derive(Debug, Clone, PartialEq)]
pub enum Dimension {
    Number(f64),
    Text(String),
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Number(n) if n.is_finite() && n.fract() == 0.0 => {
                write!(f, "{}", *n as i64)
            }
            Dimension::Number(n) => write!(f, "{n}"),
            Dimension::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Dimension {
    fn from(value: f64) -> Self {
        Dimension::Number(value)
    }
}

impl From<u32> for Dimension {
    fn from(value: u32) -> Self {
        Dimension::Number(value.into())
    }
}

impl From<i32> for Dimension {
    fn from(value: i32) -> Self {
        Dimension::Number(value.into())
    }
}

impl From<&str> for Dimension {
    fn from(value: &str) -> Self {
        Dimension::Text(value.to_owned())
    }
}

impl From<String> for Dimension {
    fn from(value: String) -> Self {
        Dimension::Text(value)
    }
}

/// Per-render configuration for an icon component.
///
/// Construct one with [`IconProps::default`] and chain the builder methods
/// for whatever should deviate from the stock appearance:
///
/// ```
/// use lucide::IconProps;
///
/// let props = IconProps::default().size(48).color("red").stroke_width(4);
/// ```
///
/// None of the fields are validated. A nonsensical value (a negative size, a
/// stroke width of `"banana"`) flows through to the output markup as given;
/// an icon is a presentational leaf and malformed input yields malformed,
/// not crashing, output.
#[derive(Debug, Clone, PartialEq)]
pub struct IconProps {
    /// Width and height of the rendered icon. Default `24`.
    pub size: Dimension,
    /// Stroke color. Default `"currentColor"`, deferring to the surrounding
    /// text color.
    pub color: String,
    /// Stroke thickness. Default `2`.
    pub stroke_width: Dimension,
    /// When set, `stroke_width` is interpreted as an absolute on-screen
    /// thickness: the resolver pre-divides it by the factor the viewport
    /// scales the 24×24 coordinate space with, so the drawn stroke keeps the
    /// same visual weight at every size. Default `false`.
    pub absolute_stroke_width: bool,
    /// Class names appended after the icon's own class list.
    pub class_names: Vec<String>,
    /// Arbitrary attribute overrides, applied to the root element last, in
    /// order. An override replaces the computed attribute of the same name,
    /// except `class`, which is additive.
    pub attributes: Vec<(String, String)>,
    /// Extra child markup appended after the icon's own sub-elements.
    pub children: Vec<String>,
}

impl Default for IconProps {
    fn default() -> Self {
        IconProps {
            size: Dimension::Number(24.0),
            color: "currentColor".to_owned(),
            stroke_width: Dimension::Number(2.0),
            absolute_stroke_width: false,
            class_names: Vec::new(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }
}

impl IconProps {
    pub fn size(mut self, size: impl Into<Dimension>) -> Self {
        self.size = size.into();
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn stroke_width(mut self, stroke_width: impl Into<Dimension>) -> Self {
        self.stroke_width = stroke_width.into();
        self
    }

    pub fn absolute_stroke_width(mut self, absolute: bool) -> Self {
        self.absolute_stroke_width = absolute;
        self
    }

    /// Append a class name (or a space-separated list of them).
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class_names.push(class.into());
        self
    }

    /// Append an attribute override, e.g. `aria-label` or `data-testid`.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Append raw child markup, rendered after the icon's own sub-elements.
    pub fn child(mut self, markup: impl Into<String>) -> Self {
        self.children.push(markup.into());
        self
    }
}

/// The flattened attribute list applied to the rendered root element.
///
/// The computed attributes always come out in the same fixed order, and
/// caller overrides replace values in place, so resolving identical props
/// twice yields byte-identical markup.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedAttributes {
    attrs: Vec<(String, String)>,
}

impl ResolvedAttributes {
    fn new() -> Self {
        ResolvedAttributes { attrs: Vec::new() }
    }

    fn push(&mut self, name: &str, value: impl Into<String>) {
        self.attrs.push((name.to_owned(), value.into()));
    }

    /// Override an attribute in place, or append it if it wasn't computed.
    fn set(&mut self, name: &str, value: String) {
        match self.attrs.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = value,
            None => self.attrs.push((name.to_owned(), value)),
        }
    }

    /// Merge extra class names into the class attribute, skipping duplicates.
    fn append_class(&mut self, extra: &str) {
        let Some((_, classes)) = self.attrs.iter_mut().find(|(n, _)| n == "class") else {
            self.attrs.push(("class".to_owned(), extra.to_owned()));
            return;
        };

        for class in extra.split_whitespace() {
            if !classes.split_whitespace().any(|existing| existing == class) {
                classes.push(' ');
                classes.push_str(class);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

/// Compute the final root-element attributes for one render of the icon
/// named `icon_name` (in its PascalCase form) under `props`.
///
/// Pure and deterministic; called once per render, never cached, as props
/// may change between renders.
pub fn resolve(icon_name: &str, props: &IconProps) -> ResolvedAttributes {
    let size = props.size.to_string();

    let mut attrs = ResolvedAttributes::new();
    attrs.push("xmlns", "http://www.w3.org/2000/svg");
    attrs.push("width", size.clone());
    attrs.push("height", size);
    attrs.push("viewBox", "0 0 24 24");
    attrs.push("fill", "none");
    attrs.push("stroke", props.color.clone());
    attrs.push("stroke-width", resolve_stroke_width(props).to_string());
    attrs.push("stroke-linecap", "round");
    attrs.push("stroke-linejoin", "round");
    attrs.push("class", class_list(icon_name, &props.class_names));

    for (name, value) in &props.attributes {
        if name == "class" {
            attrs.append_class(value);
        } else {
            attrs.set(name, value.clone());
        }
    }

    attrs
}

fn resolve_stroke_width(props: &IconProps) -> Dimension {
    if props.absolute_stroke_width {
        // The viewport scales the 24-unit coordinate space by size/24, so
        // dividing the requested thickness back out keeps it constant on
        // screen. Only meaningful when both values are numeric; anything
        // else passes through unscaled.
        if let (Dimension::Number(width), Dimension::Number(size)) =
            (&props.stroke_width, &props.size)
        {
            return Dimension::Number(width * 24.0 / size);
        }
    }

    props.stroke_width.clone()
}

fn class_list(icon_name: &str, extra: &[String]) -> String {
    let mut classes = vec!["lucide".to_owned(), format!("lucide-{}", to_kebab_case(icon_name))];

    for class in extra.iter().flat_map(|c| c.split_whitespace()) {
        if !classes.iter().any(|existing| existing == class) {
            classes.push(class.to_owned());
        }
    }

    classes.join(" ")
}

/// Turn a PascalCase icon name into its kebab-case public form:
/// `"PenLine"` becomes `"pen-line"`.
pub fn to_kebab_case(name: &str) -> String {
    let mut kebab = String::with_capacity(name.len() + 2);

    for ch in name.chars() {
        if ch.is_ascii_uppercase() && !kebab.is_empty() {
            kebab.push('-');
        }
        kebab.extend(ch.to_lowercase());
    }

    kebab
}

#[cfg(test)]
mod test {
    use crate::attrs::{Dimension, IconProps, resolve, to_kebab_case};

    #[test]
    fn test_dimension_formatting() {
        assert_eq!(Dimension::from(24).to_string(), "24");
        assert_eq!(Dimension::from(1.5).to_string(), "1.5");
        assert_eq!(Dimension::from("2em").to_string(), "2em");
    }

    #[test]
    fn test_kebab_case() {
        assert_eq!(to_kebab_case("Grid"), "grid");
        assert_eq!(to_kebab_case("PenLine"), "pen-line");
        assert_eq!(to_kebab_case("LoaderCircle"), "loader-circle");
    }

    #[test]
    fn test_default_attributes() {
        let attrs = resolve("Grid", &IconProps::default());

        assert_eq!(attrs.get("xmlns"), Some("http://www.w3.org/2000/svg"));
        assert_eq!(attrs.get("width"), Some("24"));
        assert_eq!(attrs.get("height"), Some("24"));
        assert_eq!(attrs.get("viewBox"), Some("0 0 24 24"));
        assert_eq!(attrs.get("fill"), Some("none"));
        assert_eq!(attrs.get("stroke"), Some("currentColor"));
        assert_eq!(attrs.get("stroke-width"), Some("2"));
        assert_eq!(attrs.get("class"), Some("lucide lucide-grid"));
    }

    #[test]
    fn test_stroke_width_passes_through_by_default() {
        let props = IconProps::default().size(48).stroke_width(4);
        let attrs = resolve("Grid", &props);

        assert_eq!(attrs.get("width"), Some("48"));
        assert_eq!(attrs.get("height"), Some("48"));
        assert_eq!(attrs.get("stroke-width"), Some("4"));
    }

    #[test]
    fn test_absolute_stroke_width_is_rescaled() {
        // at size 48 the viewport doubles everything, so an absolute
        // thickness of 2 must be emitted as 1
        let props = IconProps::default().size(48).absolute_stroke_width(true);
        let attrs = resolve("Grid", &props);

        assert_eq!(attrs.get("stroke-width"), Some("1"));

        let props = IconProps::default()
            .size(48)
            .stroke_width(4)
            .absolute_stroke_width(true);
        assert_eq!(resolve("Grid", &props).get("stroke-width"), Some("2"));
    }

    #[test]
    fn test_absolute_stroke_width_with_text_size_is_untouched() {
        let props = IconProps::default()
            .size("3em")
            .stroke_width(4)
            .absolute_stroke_width(true);
        let attrs = resolve("Grid", &props);

        assert_eq!(attrs.get("width"), Some("3em"));
        assert_eq!(attrs.get("stroke-width"), Some("4"));
    }

    #[test]
    fn test_class_names_are_appended_without_duplicates() {
        let props = IconProps::default().class("my-class").class("lucide my-class other");
        let attrs = resolve("Droplet", &props);

        assert_eq!(
            attrs.get("class"),
            Some("lucide lucide-droplet my-class other")
        );
    }

    #[test]
    fn test_attribute_overrides_win_except_class() {
        let props = IconProps::default()
            .attr("stroke-linecap", "butt")
            .attr("data-testid", "grid-icon")
            .attr("class", "extra");
        let attrs = resolve("Grid", &props);

        assert_eq!(attrs.get("stroke-linecap"), Some("butt"));
        assert_eq!(attrs.get("data-testid"), Some("grid-icon"));
        assert_eq!(attrs.get("class"), Some("lucide lucide-grid extra"));

        // overrides replace in place, so the attribute order is unchanged
        let names: Vec<_> = attrs.iter().map(|(n, _)| n.to_owned()).collect();
        assert_eq!(names[7], "stroke-linecap");
        assert_eq!(names[10], "data-testid");
    }
}
