//! Minimal element-tree query capability the advisory parser runs on.
//!
//! The parser only needs three things from an XML library: an element's tag name, its child
//! elements, and its text content. Everything else (descendant search, tag lookup) is derived
//! here, so plugging in another XML crate means implementing [`ElementNode`] for its node type.

/// An element in a parsed document.
pub trait ElementNode: Clone {
    /// Tag name of the element, either local (`coordinates`) or prefixed (`gml:coordinates`).
    /// Lookups go through [`ElementNode::local_name`], so both forms match.
    fn tag_name(&self) -> &str;

    /// Child elements in document order (text, comments and processing instructions excluded).
    fn child_elements(&self) -> Vec<Self>;

    /// Concatenated text of every descendant text node.
    fn text_content(&self) -> String;

    /// Tag name with any `prefix:` removed.
    fn local_name(&self) -> &str {
        let tag = self.tag_name();
        tag.rsplit_once(':').map_or(tag, |(_, local)| local)
    }

    fn is(&self, local_name: &str) -> bool {
        self.local_name() == local_name
    }

    /// Every descendant element (self excluded), depth-first pre-order.
    fn descendants(&self) -> Vec<Self> {
        let mut out = Vec::new();
        let mut stack: Vec<Self> = self.child_elements().into_iter().rev().collect();
        while let Some(node) = stack.pop() {
            stack.extend(node.child_elements().into_iter().rev());
            out.push(node);
        }
        out
    }

    fn find_all(&self, local_name: &str) -> Vec<Self> {
        self.descendants()
            .into_iter()
            .filter(|n| n.is(local_name))
            .collect()
    }

    fn find_first(&self, local_name: &str) -> Option<Self> {
        self.descendants().into_iter().find(|n| n.is(local_name))
    }

    /// Text of the first descendant named `local_name`.
    fn find_text(&self, local_name: &str) -> Option<String> {
        self.find_first(local_name).map(|n| n.text_content())
    }

    /// Elements whose tag contains "coordinates" (any case, any namespace prefix), depth-first.
    ///
    /// The search does not descend into a matching element, and `self` is included when it
    /// matches.
    fn coordinates_nodes(&self) -> Vec<Self> {
        fn is_coordinates(tag: &str) -> bool {
            tag.to_ascii_lowercase().contains("coordinates")
        }

        let mut out = Vec::new();
        let mut stack = vec![self.clone()];
        while let Some(node) = stack.pop() {
            if is_coordinates(node.tag_name()) {
                out.push(node);
                continue;
            }
            stack.extend(node.child_elements().into_iter().rev());
        }
        out
    }
}

impl<'a, 'input: 'a> ElementNode for roxmltree::Node<'a, 'input> {
    fn tag_name(&self) -> &str {
        roxmltree::Node::tag_name(self).name()
    }

    fn child_elements(&self) -> Vec<Self> {
        self.children().filter(roxmltree::Node::is_element).collect()
    }

    fn text_content(&self) -> String {
        roxmltree::Node::descendants(self)
            .filter(roxmltree::Node::is_text)
            .filter_map(|n| n.text())
            .collect()
    }

    fn descendants(&self) -> Vec<Self> {
        roxmltree::Node::descendants(self)
            .skip(1)
            .filter(roxmltree::Node::is_element)
            .collect()
    }
}
