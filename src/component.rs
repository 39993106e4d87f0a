use crate::attrs::{IconProps, resolve};

/// One primitive sub-element of an icon: an element kind (`"path"`,
/// `"circle"`, `"line"`, ...) paired with its fixed attribute list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconNode {
    pub kind: &'static str,
    pub attrs: &'static [(&'static str, &'static str)],
}

/// A named, immutable list of [IconNode]s making up one icon.
///
/// Definitions are generated from the shared icon dataset and live in
/// statics; every render of an icon reads the same shared instance. Node
/// order is paint order: later nodes draw over earlier ones.
#[derive(Debug, PartialEq, Eq)]
pub struct IconDefinition {
    /// The canonical PascalCase name, e.g. `"PenLine"`.
    pub name: &'static str,
    pub nodes: &'static [IconNode],
}

/// A renderable icon, produced by [create_icon] from an [IconDefinition].
///
/// Rendering is a pure function from props to markup: no shared state is
/// touched, and identical props yield byte-identical output. That makes
/// components safe to share freely (aliases *are* the canonical component,
/// re-exported under another name) and cheap to snapshot-test.
#[derive(Debug, PartialEq, Eq)]
pub struct IconComponent {
    def: &'static IconDefinition,
}

/// Produce the component for an icon definition.
pub const fn create_icon(def: &'static IconDefinition) -> IconComponent {
    IconComponent { def }
}

impl IconComponent {
    /// The canonical PascalCase name of this icon.
    pub fn name(&self) -> &'static str {
        self.def.name
    }

    pub fn definition(&self) -> &'static IconDefinition {
        self.def
    }

    /// Render this icon to SVG markup under the given props.
    ///
    /// The output is a single root `<svg>` element carrying the resolved
    /// attributes, wrapping the definition's nodes in order, followed by any
    /// extra child markup from the props.
    pub fn render(&self, props: &IconProps) -> String {
        let attrs = resolve(self.def.name, props);

        let mut svg = String::from("<svg");
        for (name, value) in attrs.iter() {
            push_attr(&mut svg, name, value);
        }
        svg.push('>');

        for node in self.def.nodes {
            svg.push('<');
            svg.push_str(node.kind);
            for (name, value) in node.attrs {
                push_attr(&mut svg, name, value);
            }
            svg.push_str("/>");
        }

        // children are markup, not text: appended verbatim
        for child in &props.children {
            svg.push_str(child);
        }

        svg.push_str("</svg>");
        svg
    }

    /// Render with the stock props.
    pub fn render_default(&self) -> String {
        self.render(&IconProps::default())
    }
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");

    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }

    out.push('"');
}

#[cfg(test)]
mod test {
    use crate::attrs::IconProps;
    use crate::component::{IconComponent, IconDefinition, IconNode, create_icon};

    static SPECK: IconDefinition = IconDefinition {
        name: "Speck",
        nodes: &[
            IconNode {
                kind: "circle",
                attrs: &[("cx", "12"), ("cy", "12"), ("r", "1")],
            },
            IconNode {
                kind: "path",
                attrs: &[("d", "M5 12h14")],
            },
        ],
    };

    static SPECK_ICON: IconComponent = create_icon(&SPECK);

    #[test]
    fn test_render_default() {
        assert_eq!(
            SPECK_ICON.render_default(),
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"24\" height=\"24\" \
             viewBox=\"0 0 24 24\" fill=\"none\" stroke=\"currentColor\" stroke-width=\"2\" \
             stroke-linecap=\"round\" stroke-linejoin=\"round\" class=\"lucide lucide-speck\">\
             <circle cx=\"12\" cy=\"12\" r=\"1\"/><path d=\"M5 12h14\"/></svg>"
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let props = IconProps::default()
            .size(48)
            .color("red")
            .attr("aria-label", "a speck");

        assert_eq!(SPECK_ICON.render(&props), SPECK_ICON.render(&props));
    }

    #[test]
    fn test_children_come_after_the_icon_nodes() {
        let props = IconProps::default().child("<title>A speck</title>");
        let svg = SPECK_ICON.render(&props);

        assert!(svg.ends_with("<path d=\"M5 12h14\"/><title>A speck</title></svg>"));
    }

    #[test]
    fn test_attribute_values_are_escaped() {
        let props = IconProps::default().attr("aria-label", "\"fancy\" & <plain>");
        let svg = SPECK_ICON.render(&props);

        assert!(svg.contains("aria-label=\"&quot;fancy&quot; &amp; &lt;plain&gt;\""));
    }
}
