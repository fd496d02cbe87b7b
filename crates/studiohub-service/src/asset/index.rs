//! Id-indexed view over a flat asset collection.
//!
//! Recursive operations resolve parents and children through this index
//! instead of rescanning the slice, so a walk over the tree costs O(n) once
//! the index is built.

use std::collections::{HashMap, HashSet};

use studiohub_entity::AssetNode;

use super::error::TreeError;

/// Borrowed lookup tables for one node collection.
#[derive(Debug, Clone)]
pub struct AssetIndex<'a> {
    nodes: &'a [AssetNode],
    by_id: HashMap<&'a str, usize>,
    children: HashMap<&'a str, Vec<usize>>,
    roots: Vec<usize>,
}

impl<'a> AssetIndex<'a> {
    /// Build the index. With duplicate ids, the first occurrence wins.
    pub fn new(nodes: &'a [AssetNode]) -> Self {
        let mut by_id = HashMap::with_capacity(nodes.len());
        let mut children: HashMap<&'a str, Vec<usize>> = HashMap::new();
        let mut roots = Vec::new();

        for (pos, node) in nodes.iter().enumerate() {
            by_id.entry(node.id.as_str()).or_insert(pos);
            match &node.parent {
                Some(parent) => children.entry(parent.as_str()).or_default().push(pos),
                None => roots.push(pos),
            }
        }

        Self {
            nodes,
            by_id,
            children,
            roots,
        }
    }

    /// The indexed collection.
    pub fn nodes(&self) -> &'a [AssetNode] {
        self.nodes
    }

    /// Number of indexed nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node by id.
    pub fn get(&self, id: &str) -> Option<&'a AssetNode> {
        let nodes = self.nodes;
        self.by_id.get(id).map(|&pos| &nodes[pos])
    }

    /// Look up a node by id, failing with [`TreeError::NotFound`].
    pub fn require(&self, id: &str) -> Result<&'a AssetNode, TreeError> {
        self.get(id).ok_or_else(|| TreeError::NotFound(id.into()))
    }

    /// Whether a node with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Nodes without a parent, in collection order.
    pub fn roots(&self) -> impl Iterator<Item = &'a AssetNode> + '_ {
        let nodes = self.nodes;
        self.roots.iter().map(move |&pos| &nodes[pos])
    }

    /// Direct children of `id`, in collection order. Unknown ids yield nothing.
    pub fn children(&self, id: &str) -> impl Iterator<Item = &'a AssetNode> + '_ {
        let nodes = self.nodes;
        self.children
            .get(id)
            .into_iter()
            .flatten()
            .map(move |&pos| &nodes[pos])
    }

    /// Whether `id` has at least one direct child.
    pub fn has_children(&self, id: &str) -> bool {
        self.children.get(id).is_some_and(|c| !c.is_empty())
    }

    /// Transitive children of `id` in pre-order.
    ///
    /// With `follow_files` unset, file nodes are collected but never expanded,
    /// which is the visible hierarchy. With it set, every parent link is
    /// followed, which is what structural checks need. A visited set keeps
    /// corrupted (cyclic) input from looping.
    pub fn subtree(&self, id: &str, follow_files: bool) -> Vec<&'a AssetNode> {
        let Some(start) = self.get(id) else {
            return Vec::new();
        };
        if !follow_files && !start.is_folder() {
            return Vec::new();
        }

        let mut out = Vec::new();
        let mut visited: HashSet<&str> = HashSet::new();
        visited.insert(start.id.as_str());

        let mut stack: Vec<&'a AssetNode> = self.children(id).collect();
        stack.reverse();

        while let Some(node) = stack.pop() {
            if !visited.insert(node.id.as_str()) {
                continue;
            }
            out.push(node);
            if follow_files || node.is_folder() {
                let before = stack.len();
                stack.extend(self.children(node.id.as_str()));
                stack[before..].reverse();
            }
        }

        out
    }

    /// Parent chain of `id`, nearest parent first. Stops at a root, at a
    /// dangling reference, or when a cycle is detected.
    pub fn ancestors(&self, id: &str) -> Vec<&'a AssetNode> {
        let mut chain = Vec::new();
        let Some(mut current) = self.get(id) else {
            return chain;
        };
        let mut visited: HashSet<&str> = HashSet::new();
        visited.insert(current.id.as_str());

        while let Some(parent_id) = current.parent.as_ref() {
            let Some(parent) = self.get(parent_id.as_str()) else {
                break;
            };
            if !visited.insert(parent.id.as_str()) {
                break;
            }
            chain.push(parent);
            current = parent;
        }

        chain
    }

    /// Depth of `id` (0 for a root).
    ///
    /// Fails with `NotFound` for unknown ids, `DanglingParent` when the chain
    /// leads to a missing node, and `CircularReference` on cyclic input.
    pub fn depth_of(&self, id: &str) -> Result<usize, TreeError> {
        let mut current = self.require(id)?;
        let mut visited: HashSet<&str> = HashSet::new();
        visited.insert(current.id.as_str());
        let mut depth = 0;

        while let Some(parent_id) = current.parent.as_ref() {
            let parent = self
                .get(parent_id.as_str())
                .ok_or_else(|| TreeError::DanglingParent {
                    node_id: current.id.clone(),
                    parent_id: parent_id.clone(),
                })?;
            if !visited.insert(parent.id.as_str()) {
                return Err(TreeError::CircularReference {
                    node_id: current.id.clone(),
                    parent_id: parent_id.clone(),
                });
            }
            depth += 1;
            current = parent;
        }

        Ok(depth)
    }

    /// Number of levels below `id` following every parent link (0 for a leaf).
    pub fn height_of(&self, id: &str) -> usize {
        let mut visited: HashSet<&str> = HashSet::new();
        visited.insert(id);
        let mut frontier: Vec<&str> = vec![id];
        let mut height = 0;

        loop {
            let next: Vec<&str> = frontier
                .iter()
                .flat_map(|parent| self.children(parent))
                .map(|child| child.id.as_str())
                .filter(|child| visited.insert(*child))
                .collect();
            if next.is_empty() {
                return height;
            }
            height += 1;
            frontier = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::testing::{chain, file, folder, scenario};

    #[test]
    fn test_lookup_and_children() {
        let nodes = scenario();
        let index = AssetIndex::new(&nodes);

        assert_eq!(index.len(), 3);
        assert!(index.contains("b"));
        assert!(!index.contains("zzz"));
        assert_eq!(index.roots().map(|n| n.id.as_str()).collect::<Vec<_>>(), ["a"]);
        assert_eq!(
            index.children("a").map(|n| n.id.as_str()).collect::<Vec<_>>(),
            ["b"]
        );
        assert!(index.has_children("b"));
        assert!(!index.has_children("c"));
        assert_eq!(index.children("missing").count(), 0);
    }

    #[test]
    fn test_subtree_is_preorder() {
        let nodes = vec![
            folder("root", None),
            folder("x", Some("root")),
            file("x1", Some("x")),
            folder("y", Some("root")),
            file("y1", Some("y")),
        ];
        let index = AssetIndex::new(&nodes);

        let ids: Vec<_> = index
            .subtree("root", false)
            .iter()
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(ids, ["x", "x1", "y", "y1"]);
    }

    #[test]
    fn test_subtree_stops_at_files_unless_following() {
        let nodes = vec![
            folder("root", None),
            file("f", Some("root")),
            file("under-file", Some("f")),
        ];
        let index = AssetIndex::new(&nodes);

        assert_eq!(index.subtree("root", false).len(), 1);
        assert_eq!(index.subtree("root", true).len(), 2);
        assert!(index.subtree("f", false).is_empty());
        assert_eq!(index.subtree("f", true).len(), 1);
    }

    #[test]
    fn test_cyclic_input_terminates() {
        let nodes = vec![folder("p", Some("q")), folder("q", Some("p"))];
        let index = AssetIndex::new(&nodes);

        assert_eq!(index.subtree("p", true).len(), 1);
        assert_eq!(index.ancestors("p").len(), 1);
        assert!(matches!(
            index.depth_of("p"),
            Err(TreeError::CircularReference { .. })
        ));
    }

    #[test]
    fn test_depth_and_height() {
        let nodes = chain(4);
        let index = AssetIndex::new(&nodes);

        assert_eq!(index.depth_of("f0").unwrap(), 0);
        assert_eq!(index.depth_of("f3").unwrap(), 3);
        assert_eq!(index.height_of("f0"), 3);
        assert_eq!(index.height_of("f3"), 0);
        assert_eq!(
            index.depth_of("nope"),
            Err(TreeError::NotFound("nope".into()))
        );
    }

    #[test]
    fn test_dangling_parent_depth() {
        let nodes = vec![file("orphan", Some("gone"))];
        let index = AssetIndex::new(&nodes);
        assert!(matches!(
            index.depth_of("orphan"),
            Err(TreeError::DanglingParent { .. })
        ));
    }
}
