//! The resolution cursor.
//!
//! A [`Cursor`] holds the two halves of an in-progress resolution: the
//! confined prefix that has already been walked, kept relative to the scope,
//! and the queue of segments still to walk. The confined prefix only ever
//! holds normal components, so joining it onto the scope can never produce a
//! path outside the scope.

use std::collections::VecDeque;
use std::ffi::{OsStr, OsString};
use std::path::{Component, Path, PathBuf};

/// One unwalked step of a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// A `..` component.
    Parent,
    /// A normal, named component.
    Name(OsString),
}

impl Segment {
    /// Split a path into walkable segments.
    ///
    /// Root, prefix and `.` components carry no step and are dropped; callers
    /// check [`Path::has_root`] themselves when absoluteness matters.
    ///
    /// # Examples
    ///
    /// ```
    /// use symscope::path::segment::Segment;
    /// use std::path::Path;
    ///
    /// let segments = Segment::parse(Path::new("/a/./../b"));
    /// assert_eq!(
    ///     segments,
    ///     vec![
    ///         Segment::Name("a".into()),
    ///         Segment::Parent,
    ///         Segment::Name("b".into()),
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn parse(path: &Path) -> Vec<Self> {
        path.components()
            .filter_map(|component| match component {
                Component::ParentDir => Some(Self::Parent),
                Component::Normal(name) => Some(Self::Name(name.to_os_string())),
                Component::Prefix(_) | Component::RootDir | Component::CurDir => None,
            })
            .collect()
    }
}

/// Walk state for one resolution, relative to a scope.
#[derive(Debug, Clone, Default)]
pub struct Cursor {
    confined: Vec<OsString>,
    remaining: VecDeque<Segment>,
}

impl Cursor {
    /// Start a cursor at the scope root with `relative` left to walk.
    #[must_use]
    pub fn new(relative: &Path) -> Self {
        Self {
            confined: Vec::new(),
            remaining: Segment::parse(relative).into(),
        }
    }

    /// Take the next unwalked segment.
    pub fn next_segment(&mut self) -> Option<Segment> {
        self.remaining.pop_front()
    }

    /// Append a name to the confined prefix.
    pub fn descend(&mut self, name: OsString) {
        self.confined.push(name);
    }

    /// Apply a `..` to the confined prefix. At the scope root this is a no-op.
    pub fn ascend(&mut self) {
        self.confined.pop();
    }

    /// Reset the confined prefix to the scope root.
    pub fn reroot(&mut self) {
        self.confined.clear();
    }

    /// Queue a link target ahead of the remaining segments.
    pub fn splice(&mut self, target: &Path) {
        for segment in Segment::parse(target).into_iter().rev() {
            self.remaining.push_front(segment);
        }
    }

    /// The confined prefix as a relative path.
    #[must_use]
    pub fn confined(&self) -> PathBuf {
        self.confined.iter().map(OsString::as_os_str).collect()
    }

    /// The confined prefix extended by `name`, relative to the scope.
    #[must_use]
    pub fn candidate(&self, name: &OsStr) -> PathBuf {
        let mut candidate = self.confined();
        candidate.push(name);
        candidate
    }

    /// The confined prefix joined onto `scope`.
    #[must_use]
    pub fn under(&self, scope: &Path) -> PathBuf {
        let mut path = scope.to_path_buf();
        path.extend(&self.confined);
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk_lexically(cursor: &mut Cursor) {
        while let Some(segment) = cursor.next_segment() {
            match segment {
                Segment::Parent => cursor.ascend(),
                Segment::Name(name) => cursor.descend(name),
            }
        }
    }

    #[test]
    fn test_parse_drops_root_and_current_dir() {
        let segments = Segment::parse(Path::new("/./a/b"));
        assert_eq!(
            segments,
            vec![Segment::Name("a".into()), Segment::Name("b".into())]
        );
    }

    #[test]
    fn test_parse_keeps_parent_order() {
        let segments = Segment::parse(Path::new("../../x"));
        assert_eq!(
            segments,
            vec![Segment::Parent, Segment::Parent, Segment::Name("x".into())]
        );
    }

    #[test]
    fn test_ascend_clamps_at_scope_root() {
        let mut cursor = Cursor::new(Path::new("a/../../../b"));
        walk_lexically(&mut cursor);
        assert_eq!(cursor.confined(), PathBuf::from("b"));
    }

    #[test]
    fn test_splice_runs_before_remaining() {
        let mut cursor = Cursor::new(Path::new("dir/link/rest"));
        let Some(Segment::Name(dir)) = cursor.next_segment() else {
            panic!("expected a name segment");
        };
        cursor.descend(dir);
        assert_eq!(cursor.next_segment(), Some(Segment::Name("link".into())));
        cursor.splice(Path::new("../target/inner"));
        walk_lexically(&mut cursor);
        assert_eq!(cursor.confined(), PathBuf::from("target/inner/rest"));
        assert_eq!(cursor.next_segment(), None);
    }

    #[test]
    fn test_reroot_clears_confined() {
        let mut cursor = Cursor::new(Path::new("a/b"));
        walk_lexically(&mut cursor);
        cursor.reroot();
        assert_eq!(cursor.confined(), PathBuf::new());
        assert_eq!(cursor.next_segment(), None);
    }

    #[test]
    #[cfg(unix)]
    fn test_under_joins_scope() {
        let mut cursor = Cursor::new(Path::new("x/y"));
        walk_lexically(&mut cursor);
        assert_eq!(cursor.under(Path::new("/srv")), PathBuf::from("/srv/x/y"));
        assert_eq!(cursor.candidate(OsStr::new("z")), PathBuf::from("x/y/z"));
    }
}
