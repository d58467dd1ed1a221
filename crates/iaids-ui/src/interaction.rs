//! Click dispatch and change notification for the attachable widget.
//!
//! # Design
//! - Resolving a click to an intent only needs ancestor lookup and attribute
//!   reads, expressed by [`ClickTarget`] so the rules run without a browser.
//! - Clicks that resolve to nothing are ignored.
//! - Observers are cloned out of their slot before running, so an observer
//!   may replace itself.

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::WidgetConfig;
use crate::selection::{Change, Selection};

/// Attribute holding the value a rendered tag stands for.
pub const TAG_VALUE_ATTRIBUTE: &str = "data-value";

/// DOM lookups needed to resolve a click inside the widget.
pub trait ClickTarget: Sized {
    /// Nearest inclusive ancestor matching `selector` inside the listening container.
    fn closest(&self, selector: &str) -> Option<Self>;
    /// Attribute value, when present.
    fn attribute(&self, name: &str) -> Option<String>;
    /// Value an option element submits.
    fn option_value(&self) -> String;
}

/// Selection change requested by a click.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickIntent {
    /// An option was clicked; flip its value.
    Toggle(String),
    /// A tag's removal icon was clicked; drop its value.
    Remove(String),
}

impl ClickIntent {
    /// Apply the intent to `selection`.
    pub fn apply(&self, selection: &mut Selection) -> Change {
        match self {
            Self::Toggle(value) => selection.toggle(value),
            Self::Remove(value) => selection.remove(value),
        }
    }
}

/// Resolve a click on the option control.
#[must_use]
pub fn option_click<T: ClickTarget>(target: Option<&T>) -> Option<ClickIntent> {
    let option = target?.closest("option")?;
    Some(ClickIntent::Toggle(option.option_value()))
}

/// Resolve a click on the tag row; only removal icons inside a tag count.
///
/// A tag without a value attribute stands for the empty string.
#[must_use]
pub fn remove_click<T: ClickTarget>(target: Option<&T>, config: &WidgetConfig) -> Option<ClickIntent> {
    let icon = target?.closest(&config.remove_icon_selector())?;
    let tag = icon.closest(&config.tag_selector())?;
    Some(ClickIntent::Remove(
        tag.attribute(TAG_VALUE_ATTRIBUTE).unwrap_or_default(),
    ))
}

type Observer = Rc<dyn Fn(&[String])>;

/// Single replaceable change observer.
#[derive(Default)]
pub struct ChangeNotifier {
    observer: RefCell<Option<Observer>>,
}

impl ChangeNotifier {
    /// Install `observer`, replacing any previous one.
    pub fn set(&self, observer: impl Fn(&[String]) + 'static) {
        *self.observer.borrow_mut() = Some(Rc::new(observer));
    }

    /// Run the current observer, if any, with `values`.
    pub fn notify(&self, values: &[String]) {
        let observer = self.observer.borrow().clone();
        if let Some(observer) = observer {
            observer(values);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct Node {
        parent: Option<usize>,
        tag: &'static str,
        class: Option<&'static str>,
        attributes: Vec<(&'static str, &'static str)>,
        text: &'static str,
    }

    /// Element handle into a small in-memory tree.
    #[derive(Clone, Copy)]
    struct Handle<'a> {
        tree: &'a [Node],
        index: usize,
    }

    impl Handle<'_> {
        fn matches(&self, selector: &str) -> bool {
            let node = &self.tree[self.index];
            selector
                .strip_prefix('.')
                .map_or(node.tag == selector, |class| node.class == Some(class))
        }
    }

    impl ClickTarget for Handle<'_> {
        fn closest(&self, selector: &str) -> Option<Self> {
            let mut current = Some(self.index);
            while let Some(index) = current {
                let handle = Handle {
                    tree: self.tree,
                    index,
                };
                if handle.matches(selector) {
                    return Some(handle);
                }
                current = self.tree[index].parent;
            }
            None
        }

        fn attribute(&self, name: &str) -> Option<String> {
            self.tree[self.index]
                .attributes
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value).to_string())
        }

        fn option_value(&self) -> String {
            self.attribute("value")
                .unwrap_or_else(|| self.tree[self.index].text.to_string())
        }
    }

    // 0 control, 1 button slot, 2 option b, 3 span inside option b,
    // 4 option without value, 5 tag row, 6 tag "a", 7 icon of "a",
    // 8 tag with empty value, 9 icon of empty tag, 10 tag without value attribute, 11 its icon
    fn tree() -> Vec<Node> {
        vec![
            Node { tag: "selectmenu", ..Node::default() },
            Node { parent: Some(0), tag: "div", ..Node::default() },
            Node { parent: Some(0), tag: "option", attributes: vec![("value", "b")], text: "Bravo", ..Node::default() },
            Node { parent: Some(2), tag: "span", ..Node::default() },
            Node { parent: Some(0), tag: "option", text: "Charlie", ..Node::default() },
            Node { tag: "div", class: Some("selected-values"), ..Node::default() },
            Node { parent: Some(5), tag: "div", class: Some("chip"), attributes: vec![("data-value", "a")], ..Node::default() },
            Node { parent: Some(6), tag: "gov-icon", class: Some("close"), ..Node::default() },
            Node { parent: Some(5), tag: "div", class: Some("chip"), attributes: vec![("data-value", "")], ..Node::default() },
            Node { parent: Some(8), tag: "gov-icon", class: Some("close"), ..Node::default() },
            Node { parent: Some(5), tag: "div", class: Some("chip"), ..Node::default() },
            Node { parent: Some(10), tag: "gov-icon", class: Some("close"), ..Node::default() },
        ]
    }

    fn at(tree: &[Node], index: usize) -> Handle<'_> {
        Handle { tree, index }
    }

    #[test]
    fn option_click_resolves_nearest_option() {
        let tree = tree();
        assert_eq!(
            option_click(Some(&at(&tree, 3))),
            Some(ClickIntent::Toggle("b".to_string()))
        );
        assert_eq!(
            option_click(Some(&at(&tree, 4))),
            Some(ClickIntent::Toggle("Charlie".to_string()))
        );
    }

    #[test]
    fn clicks_outside_any_option_are_ignored() {
        let tree = tree();
        assert_eq!(option_click(Some(&at(&tree, 0))), None);
        assert_eq!(option_click(Some(&at(&tree, 1))), None);
        assert_eq!(option_click::<Handle<'_>>(None), None);
    }

    #[test]
    fn removal_reads_value_from_tag() {
        let tree = tree();
        let config = WidgetConfig::default();
        assert_eq!(
            remove_click(Some(&at(&tree, 7)), &config),
            Some(ClickIntent::Remove("a".to_string()))
        );
        assert_eq!(
            remove_click(Some(&at(&tree, 9)), &config),
            Some(ClickIntent::Remove(String::new()))
        );
        assert_eq!(
            remove_click(Some(&at(&tree, 11)), &config),
            Some(ClickIntent::Remove(String::new()))
        );
    }

    #[test]
    fn clicks_on_tag_body_do_not_remove() {
        let tree = tree();
        let config = WidgetConfig::default();
        assert_eq!(remove_click(Some(&at(&tree, 6)), &config), None);
        assert_eq!(remove_click(Some(&at(&tree, 5)), &config), None);
    }

    #[test]
    fn intents_drive_selection_through_a_session() {
        let tree = tree();
        let config = WidgetConfig::default();
        let mut selection = Selection::new();

        let pick_b = option_click(Some(&at(&tree, 2)));
        let pick_b = pick_b.as_ref().map(|intent| intent.apply(&mut selection));
        assert_eq!(pick_b, Some(Change::Added));
        selection.add("a");
        selection.add("");
        assert_eq!(selection.values(), ["b", "a", ""]);

        for icon in [7, 9] {
            let removed = remove_click(Some(&at(&tree, icon)), &config)
                .map(|intent| intent.apply(&mut selection));
            assert_eq!(removed, Some(Change::Removed));
        }
        assert_eq!(selection.values(), ["b"]);

        let again = option_click(Some(&at(&tree, 3))).map(|intent| intent.apply(&mut selection));
        assert_eq!(again, Some(Change::Removed));
        assert!(selection.is_empty());
    }

    #[test]
    fn observer_may_replace_itself_while_running() {
        let notifier = Rc::new(ChangeNotifier::default());
        let calls = Rc::new(Cell::new(0));
        {
            let handle = Rc::clone(&notifier);
            let calls = Rc::clone(&calls);
            notifier.set(move |values| {
                calls.set(calls.get() + values.len());
                let calls = Rc::clone(&calls);
                handle.set(move |_| calls.set(calls.get() + 100));
            });
        }

        notifier.notify(&["a".to_string()]);
        assert_eq!(calls.get(), 1);
        notifier.notify(&[]);
        assert_eq!(calls.get(), 101);
    }

    #[test]
    fn notify_without_observer_is_silent() {
        ChangeNotifier::default().notify(&["a".to_string()]);
    }
}
