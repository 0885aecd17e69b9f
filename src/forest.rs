use std::collections::{BTreeMap, HashSet};

use itertools::Itertools;
use petgraph::graphmap::UnGraphMap;
use petgraph::visit::Bfs;
use strum::VariantArray;
use unordered_pair::UnorderedPair;

use crate::connection::Connection;
use crate::grid::{Node, NodeSet};
use crate::location::{Coord, Location};

impl NodeSet {
    /// Every node joined to `node`, with the stroke of `node` that reaches it.
    ///
    /// A neighbour is joined when `node` holds the stroke toward it and it holds the inverted stroke back.
    pub fn attachees(&self, node: Node) -> Vec<(Connection, Node)> {
        Connection::VARIANTS.iter()
            .filter(|direction| node.holds(**direction))
            .filter_map(|direction| self.node_at(direction.attempt_from(node.location))
                .filter(|other| other.holds(direction.invert()))
                .map(|other| (*direction, other)))
            .collect_vec()
    }
}

/// Every node of a diagram together with the strokes joining them.
pub struct Forest {
    pub(crate) graph: UnGraphMap<Node, ()>,
}

impl Forest {
    /// Join up `nodes`.
    pub fn grow(nodes: &NodeSet) -> Self {
        let mut graph = UnGraphMap::with_capacity(nodes.len(), nodes.len() * 2);
        let mut seen: HashSet<UnorderedPair<Location>> = HashSet::new();

        for node in nodes.iter() {
            graph.add_node(node);
        }

        for node in nodes.iter() {
            for (_, other) in nodes.attachees(node) {
                // each link is found once from either end
                if seen.insert(UnorderedPair::from((node.location, other.location))) {
                    graph.add_edge(node, other, ());
                }
            }
        }

        Self { graph }
    }

    /// Pairs of locations whose letters are joined.
    pub fn links(&self) -> HashSet<UnorderedPair<Location>> {
        self.graph.all_edges()
            .map(|(n1, n2, _)| UnorderedPair::from((n1.location, n2.location)))
            .collect()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Split the forest into its trees.
    ///
    /// Trees are ordered by their first node in reading order, so the same nodes always give the same partition in the same order.
    pub fn trees(&self) -> Vec<Tree> {
        let mut planted: HashSet<Node> = HashSet::with_capacity(self.graph.node_count());
        let mut trees = Vec::new();

        for root in self.graph.nodes().sorted_by_key(|node| node.location.as_index()) {
            if planted.contains(&root) {
                continue;
            }

            let mut tree = Tree::default();
            let mut bfs = Bfs::new(&self.graph, root);
            while let Some(node) = bfs.next(&self.graph) {
                planted.insert(node);
                tree.nodes.insert(node.location.as_index(), node);
            }
            trees.push(tree);
        }

        trees
    }
}

/// One maximal set of joined nodes.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Tree {
    // keyed by (row, column)
    nodes: BTreeMap<(Coord, Coord), Node>,
}

impl Tree {
    pub fn node_at(&self, location: Location) -> Option<Node> {
        self.nodes.get(&location.as_index()).copied()
    }

    pub fn contains(&self, location: Location) -> bool {
        self.nodes.contains_key(&location.as_index())
    }

    /// The nodes of this tree in reading order.
    pub fn nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.nodes.values().copied()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
