use crate::model::{Tag, TagGroup};

/// A small convenience builder for constructing sidebar collections from code.
///
/// This is intentionally lightweight: it only provides an ergonomic way to
/// express "group with tags, then ungrouped tags" for tests, demos, and host
/// bootstrapping. `display_order` is assigned sequentially per level unless
/// set explicitly through the `*_ordered` variants.
///
/// For full control, construct [`TagGroup`] / [`Tag`] values directly.
#[derive(Debug, Default)]
pub struct SidebarBuilder {
    groups: Vec<TagGroup>,
    ungrouped: Vec<Tag>,
    next_root_order: i64,
    next_child_order: i64,
    last_added: LastAdded,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum LastAdded {
    #[default]
    None,
    Group,
    GroupTag,
    Ungrouped,
}

impl SidebarBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new group; subsequent [`SidebarBuilder::tag`] calls add to it.
    pub fn group(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        let display_order = self.next_root_order;
        self.next_root_order += 1;
        self.next_child_order = 0;
        self.last_added = LastAdded::Group;
        self.groups.push(TagGroup {
            id: id.into(),
            name: name.into(),
            color: None,
            display_order,
            tags: Vec::new(),
        });
        self
    }

    /// Add a tag to the most recently opened group.
    ///
    /// Without an open group the tag falls back to the ungrouped list; that
    /// is a builder misuse, flagged in debug builds.
    pub fn tag(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        let Some(group) = self.groups.last_mut() else {
            debug_assert!(false, "SidebarBuilder::tag called before any group");
            return self.ungrouped(id, name);
        };
        let display_order = self.next_child_order;
        self.next_child_order += 1;
        self.last_added = LastAdded::GroupTag;
        group.tags.push(Tag {
            id: id.into(),
            name: name.into(),
            color: None,
            display_order,
        });
        self
    }

    /// Add a root-level tag with no group assignment.
    pub fn ungrouped(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        let display_order = self.next_root_order;
        self.next_root_order += 1;
        self.last_added = LastAdded::Ungrouped;
        self.ungrouped.push(Tag {
            id: id.into(),
            name: name.into(),
            color: None,
            display_order,
        });
        self
    }

    /// Set the color of the most recently added group or tag.
    pub fn color(mut self, color: impl Into<String>) -> Self {
        let color = Some(color.into());
        match self.last_added {
            LastAdded::None => {}
            LastAdded::Group => {
                if let Some(group) = self.groups.last_mut() {
                    group.color = color;
                }
            }
            LastAdded::GroupTag => {
                if let Some(tag) = self.groups.last_mut().and_then(|g| g.tags.last_mut()) {
                    tag.color = color;
                }
            }
            LastAdded::Ungrouped => {
                if let Some(tag) = self.ungrouped.last_mut() {
                    tag.color = color;
                }
            }
        }
        self
    }

    /// Finish building, producing the source collections in insertion order.
    pub fn finish(self) -> (Vec<TagGroup>, Vec<Tag>) {
        (self.groups, self.ungrouped)
    }
}
