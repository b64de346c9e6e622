//! Boards, i.e. graphs of cells (nodes) connected by edges.
//!
//! A board owns all of its nodes and edges and hands out copyable handles
//! to them. The topology of a board is fixed once built, while the costs
//! and opacities of its elements may change, e.g. when a unit occupies a
//! cell and makes it impassable for others.

use crate::error::{ Error, Result };
use crate::geo::{ Line, Point, Polygon };
use crate::grid::{ Layout, Offset };

use std::convert::TryFrom;
use std::fmt;

/// The cost of moving into or across a board element.
pub type Cost = u32;

/// How much a board element obstructs the line of sight.
pub type Opacity = u32;

/// The cost of elements that can never be entered, e.g. walls or
/// occupied cells.
pub const IMPASSABLE: Cost = Cost::MAX;

/// A handle to a node of a board.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node #{}", self.0)
    }
}

/// A handle to an edge of a board.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct EdgeId(usize);

impl EdgeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "edge #{}", self.0)
    }
}

/// A board element, i.e. either a node or an edge.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Element {
    Node(NodeId),
    Edge(EdgeId),
}

impl Element {
    pub fn node(self) -> Option<NodeId> {
        match self {
            Element::Node(n) => Some(n),
            Element::Edge(_) => None,
        }
    }

    pub fn edge(self) -> Option<EdgeId> {
        match self {
            Element::Edge(e) => Some(e),
            Element::Node(_) => None,
        }
    }
}

impl From<NodeId> for Element {
    fn from(n: NodeId) -> Element {
        Element::Node(n)
    }
}

impl From<EdgeId> for Element {
    fn from(e: EdgeId) -> Element {
        Element::Edge(e)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Node(n) => n.fmt(f),
            Element::Edge(e) => e.fmt(f),
        }
    }
}

/// A cell of a board.
#[derive(Clone, Debug)]
pub struct Node {
    cost: Cost,
    opacity: Opacity,
    shape: Option<Polygon>,
    position: Option<Offset>,
    adjacent: Vec<(NodeId, EdgeId)>,
}

impl Node {
    /// The cost of moving into this node.
    pub fn cost(&self) -> Cost {
        self.cost
    }

    pub fn opacity(&self) -> Opacity {
        self.opacity
    }

    pub fn shape(&self) -> Option<&Polygon> {
        self.shape.as_ref()
    }

    pub fn position(&self) -> Option<Offset> {
        self.position
    }

    /// The adjacent nodes together with the connecting edges, in the order
    /// in which they were connected.
    pub fn neighbours(&self) -> impl Iterator<Item=(NodeId, EdgeId)> + '_ {
        self.adjacent.iter().copied()
    }

    pub fn degree(&self) -> usize {
        self.adjacent.len()
    }

    /// The edge connecting this node to `other`, if they are adjacent.
    pub fn edge_to(&self, other: NodeId) -> Option<EdgeId> {
        self.adjacent.iter().find(|(n, _)| *n == other).map(|(_, e)| *e)
    }
}

/// A connection between two distinct nodes of a board.
#[derive(Clone, Debug)]
pub struct Edge {
    nodes: (NodeId, NodeId),
    cost: Cost,
    opacity: Opacity,
    line: Option<Line>,
}

impl Edge {
    /// The two nodes connected by the edge, in the order given on creation.
    pub fn nodes(&self) -> (NodeId, NodeId) {
        self.nodes
    }

    /// The cost of moving across this edge.
    pub fn cost(&self) -> Cost {
        self.cost
    }

    pub fn opacity(&self) -> Opacity {
        self.opacity
    }

    /// The boundary segment between the shapes of the two nodes.
    pub fn line(&self) -> Option<Line> {
        self.line
    }

    pub fn joins(&self, n: NodeId) -> bool {
        self.nodes.0 == n || self.nodes.1 == n
    }

    /// Given one of the nodes of the edge, the node on the other side.
    pub fn other(&self, n: NodeId) -> Option<NodeId> {
        if self.nodes.0 == n {
            Some(self.nodes.1)
        } else if self.nodes.1 == n {
            Some(self.nodes.0)
        } else {
            None
        }
    }
}

/// A board of nodes and edges, optionally overlaid by a grid [`Layout`]
/// that gives meaning to the positions of the nodes.
///
/// [`Layout`]: ../grid/enum.Layout.html
#[derive(Clone, Debug, Default)]
pub struct Board {
    layout: Option<Layout>,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl Board {
    /// Create an empty board without a grid layout.
    pub fn new() -> Board {
        Board::default()
    }

    /// Create an empty board whose node positions follow the given layout.
    pub fn with_layout(layout: Layout) -> Board {
        Board { layout: Some(layout), .. Board::default() }
    }

    pub fn layout(&self) -> Option<Layout> {
        self.layout
    }

    /// Add a node with the given cost. Negative costs are treated as zero.
    pub fn add_node(&mut self, cost: i64) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            cost: clamp(cost),
            opacity: 0,
            shape: None,
            position: None,
            adjacent: Vec::new(),
        });
        id
    }

    /// Add a node with a shape and a position on the grid.
    pub fn add_cell(&mut self, cost: i64, shape: Polygon, position: Offset) -> NodeId {
        let id = self.add_node(cost);
        let node = &mut self.nodes[id.0];
        node.shape = Some(shape);
        node.position = Some(position);
        id
    }

    /// Connect two distinct nodes by a new edge. The adjacency is recorded
    /// on both nodes.
    pub fn connect(&mut self, a: NodeId, b: NodeId, cost: Cost, opacity: Opacity) -> Result<EdgeId> {
        self.node(a)?;
        self.node(b)?;
        if a == b {
            return Err(Error::SelfLoop(a))
        }
        if let Some(e) = self.nodes[a.0].edge_to(b) {
            return Err(Error::AlreadyConnected(a, b, e))
        }
        let id = EdgeId(self.edges.len());
        self.edges.push(Edge { nodes: (a, b), cost, opacity, line: None });
        self.nodes[a.0].adjacent.push((b, id));
        self.nodes[b.0].adjacent.push((a, id));
        Ok(id)
    }

    /// For every edge without a boundary segment whose nodes both have
    /// shapes, take the side shared by those shapes as the edge's segment.
    /// Returns the number of edges that received a segment.
    pub fn link_boundaries(&mut self) -> usize {
        let mut linked = 0;
        for i in 0 .. self.edges.len() {
            if self.edges[i].line.is_some() {
                continue
            }
            let (a, b) = self.edges[i].nodes;
            let shared = match (&self.nodes[a.0].shape, &self.nodes[b.0].shape) {
                (Some(sa), Some(sb)) => sa.shared_side(sb),
                _ => None
            };
            if let Some(line) = shared {
                self.edges[i].line = Some(line);
                linked += 1;
            } else {
                log::debug!("{} and {} share no side", a, b);
            }
        }
        linked
    }

    pub fn node(&self, id: NodeId) -> Result<&Node> {
        self.nodes.get(id.0).ok_or(Error::UnknownNode(id))
    }

    pub fn edge(&self, id: EdgeId) -> Result<&Edge> {
        self.edges.get(id.0).ok_or(Error::UnknownEdge(id))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item=NodeId> {
        (0 .. self.nodes.len()).map(NodeId)
    }

    pub fn edges(&self) -> impl Iterator<Item=EdgeId> {
        (0 .. self.edges.len()).map(EdgeId)
    }

    /// The nodes adjacent to `id` together with the connecting edges.
    pub fn neighbours(&self, id: NodeId) -> Result<impl Iterator<Item=(NodeId, EdgeId)> + '_> {
        Ok(self.node(id)?.neighbours())
    }

    /// The edge connecting two nodes. It is an error to ask for the edge
    /// between nodes that are not adjacent.
    pub fn edge_between(&self, a: NodeId, b: NodeId) -> Result<EdgeId> {
        self.node(b)?;
        self.node(a)?.edge_to(b).ok_or(Error::NotAdjacent(a, b))
    }

    pub fn set_node_cost(&mut self, id: NodeId, cost: i64) -> Result<()> {
        self.node_mut(id)?.cost = clamp(cost);
        Ok(())
    }

    pub fn set_node_opacity(&mut self, id: NodeId, opacity: Opacity) -> Result<()> {
        self.node_mut(id)?.opacity = opacity;
        Ok(())
    }

    pub fn set_shape(&mut self, id: NodeId, shape: Polygon) -> Result<()> {
        self.node_mut(id)?.shape = Some(shape);
        Ok(())
    }

    pub fn set_position(&mut self, id: NodeId, position: Offset) -> Result<()> {
        self.node_mut(id)?.position = Some(position);
        Ok(())
    }

    pub fn set_edge_cost(&mut self, id: EdgeId, cost: Cost) -> Result<()> {
        self.edge_mut(id)?.cost = cost;
        Ok(())
    }

    pub fn set_edge_opacity(&mut self, id: EdgeId, opacity: Opacity) -> Result<()> {
        self.edge_mut(id)?.opacity = opacity;
        Ok(())
    }

    pub fn set_line(&mut self, id: EdgeId, line: Line) -> Result<()> {
        self.edge_mut(id)?.line = Some(line);
        Ok(())
    }

    /// The cost of a node or an edge.
    pub fn cost_of(&self, el: Element) -> Result<Cost> {
        match el {
            Element::Node(n) => Ok(self.node(n)?.cost),
            Element::Edge(e) => Ok(self.edge(e)?.cost),
        }
    }

    /// The opacity of a node or an edge.
    pub fn opacity_of(&self, el: Element) -> Result<Opacity> {
        match el {
            Element::Node(n) => Ok(self.node(n)?.opacity),
            Element::Edge(e) => Ok(self.edge(e)?.opacity),
        }
    }

    /// The cost of crossing `edge` to enter `to`, i.e. the sum of their
    /// costs, or `None` if either of them is impassable.
    pub fn step_cost(&self, edge: EdgeId, to: NodeId) -> Result<Option<Cost>> {
        let e = self.edge(edge)?.cost;
        let n = self.node(to)?.cost;
        Ok(add(e, n))
    }

    /// The cost of moving along the given sequence of nodes, excluding the
    /// cost of the first node, which is where the move starts. `None` if
    /// any step is impassable.
    pub fn path_cost(&self, path: &[NodeId]) -> Result<Option<Cost>> {
        let mut total = Some(0);
        for w in path.windows(2) {
            let step = self.step_cost(self.edge_between(w[0], w[1])?, w[1])?;
            total = match (total, step) {
                (Some(t), Some(s)) => add(t, s),
                _ => None
            };
        }
        if let Some(first) = path.first() {
            self.node(*first)?;
        }
        Ok(total)
    }

    /// The least cost of any passable step on the board, or zero for a
    /// board without any.
    pub fn min_step_cost(&self) -> Cost {
        self.edges.iter().flat_map(|e| {
            let (a, b) = e.nodes;
            vec![add(e.cost, self.nodes[a.0].cost), add(e.cost, self.nodes[b.0].cost)]
        })
        .flatten()
        .min()
        .unwrap_or(0)
    }

    /// The grid distance between two elements. The distance of an edge to
    /// another element is the least distance of either of its nodes.
    pub fn distance(&self, a: Element, b: Element) -> Result<u32> {
        let pa = self.positions(a)?;
        let pb = self.positions(b)?;
        let layout = match (self.layout, a) {
            (Some(l), _) => l,
            (None, Element::Node(n)) => return Err(Error::NoPosition(n)),
            (None, Element::Edge(e)) => return Err(Error::NoPosition(self.edge(e)?.nodes.0)),
        };
        let mut best = u32::MAX;
        for x in &pa {
            for y in &pb {
                best = best.min(layout.distance(*x, *y));
            }
        }
        Ok(best)
    }

    /// The node whose shape contains the given point.
    pub fn node_at(&self, p: Point) -> Option<NodeId> {
        self.nodes.iter()
            .position(|n| n.shape.as_ref().map_or(false, |s| s.contains(p)))
            .map(NodeId)
    }

    /// The edge of `node` whose boundary segment is (approximately) the
    /// given side of the node's shape.
    pub fn boundary_edge(&self, node: NodeId, side: &Line) -> Result<Option<EdgeId>> {
        let n = self.node(node)?;
        Ok(n.adjacent.iter()
            .map(|(_, e)| *e)
            .find(|e| self.edges[e.0].line.map_or(false, |l| l.approx_eq(side))))
    }

    /// The representative point of an element: the center of a node's
    /// shape or the midpoint of an edge's boundary segment.
    pub fn center_of(&self, el: Element) -> Result<Point> {
        match el {
            Element::Node(n) => self.node(n)?.shape.as_ref()
                .map(|s| s.center())
                .ok_or(Error::NoShape(n)),
            Element::Edge(e) => {
                let edge = self.edge(e)?;
                edge.line.map(|l| l.center()).ok_or(Error::NoShape(edge.nodes.0))
            }
        }
    }

    fn positions(&self, el: Element) -> Result<Vec<Offset>> {
        let pos = |n: NodeId| self.node(n)?.position.ok_or(Error::NoPosition(n));
        match el {
            Element::Node(n) => Ok(vec![pos(n)?]),
            Element::Edge(e) => {
                let (a, b) = self.edge(e)?.nodes;
                Ok(vec![pos(a)?, pos(b)?])
            }
        }
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node> {
        self.nodes.get_mut(id.0).ok_or(Error::UnknownNode(id))
    }

    fn edge_mut(&mut self, id: EdgeId) -> Result<&mut Edge> {
        self.edges.get_mut(id.0).ok_or(Error::UnknownEdge(id))
    }
}

/// Add two costs, where the sum is impassable if either cost is.
fn add(a: Cost, b: Cost) -> Option<Cost> {
    if a == IMPASSABLE || b == IMPASSABLE {
        return None
    }
    a.checked_add(b).filter(|c| *c != IMPASSABLE)
}

fn clamp(cost: i64) -> Cost {
    Cost::try_from(cost.max(0)).unwrap_or(IMPASSABLE)
}
