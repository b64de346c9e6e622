
pub mod astar;

use crate::board::{ Board, Cost, EdgeId, Element, NodeId, IMPASSABLE };
use crate::error::{ Error, Result };

use std::collections::HashMap;

/// A tentative step of a search onto a node, as presented to
/// [`Context::admissible`].
///
/// [`Context::admissible`]: trait.Context.html#method.admissible
#[derive(Debug)]
pub struct Step<'a> {
    /// The node the step enters.
    pub node: NodeId,
    /// The edge crossed by the step.
    pub edge: EdgeId,
    /// The tentative path from the start of the search to `node`,
    /// both included.
    pub path: &'a [NodeId],
    /// The accumulated cost of the tentative path.
    pub cost: Cost,
}

/// The context of a search defines the cost and bounds of the search space.
pub trait Context {
    /// The accumulated cost of reaching `to` across `edge` from a node that
    /// was reached at cost `base`, or `None` if the step is impassable.
    fn cost(&mut self, board: &Board, base: Cost, edge: EdgeId, to: NodeId) -> Result<Option<Cost>> {
        accumulate(board, base, edge, to)
    }
    fn admissible(&mut self, _board: &Board, _step: &Step<'_>) -> bool {
        true
    }
    fn heuristic(&mut self, _board: &Board, _el: Element) -> Cost {
        0
    }
    /// Whether the search should end, given the nodes found so far in the
    /// order in which they were found.
    fn exit(&mut self, _found: &[NodeId]) -> bool {
        false
    }
}

/// The default cost of a step: the base cost plus the costs of the edge
/// and the node entered.
pub fn accumulate(board: &Board, base: Cost, edge: EdgeId, to: NodeId) -> Result<Option<Cost>> {
    Ok(board.step_cost(edge, to)?
        .and_then(|step| base.checked_add(step))
        .filter(|c| *c != IMPASSABLE))
}

type CostFn<'a> = Box<dyn FnMut(&Board, Cost, EdgeId, NodeId) -> Result<Option<Cost>> + 'a>;
type AdmissibleFn<'a> = Box<dyn FnMut(&Board, &Step<'_>) -> bool + 'a>;
type HeuristicFn<'a> = Box<dyn FnMut(&Board, Element) -> Cost + 'a>;
type ExitFn<'a> = Box<dyn FnMut(&[NodeId]) -> bool + 'a>;

/// A search context assembled from closures, falling back to the
/// defaults of [`Context`] for everything left unset.
///
/// [`Context`]: trait.Context.html
#[derive(Default)]
pub struct Options<'a> {
    cost: Option<CostFn<'a>>,
    admissible: Option<AdmissibleFn<'a>>,
    heuristic: Option<HeuristicFn<'a>>,
    exit: Option<ExitFn<'a>>,
}

impl<'a> Options<'a> {
    pub fn new() -> Options<'a> {
        Options::default()
    }

    pub fn cost<F>(mut self, f: F) -> Self
    where F: FnMut(&Board, Cost, EdgeId, NodeId) -> Result<Option<Cost>> + 'a
    {
        self.cost = Some(Box::new(f));
        self
    }

    pub fn admissible<F>(mut self, f: F) -> Self
    where F: FnMut(&Board, &Step<'_>) -> bool + 'a
    {
        self.admissible = Some(Box::new(f));
        self
    }

    pub fn heuristic<F>(mut self, f: F) -> Self
    where F: FnMut(&Board, Element) -> Cost + 'a
    {
        self.heuristic = Some(Box::new(f));
        self
    }

    pub fn exit<F>(mut self, f: F) -> Self
    where F: FnMut(&[NodeId]) -> bool + 'a
    {
        self.exit = Some(Box::new(f));
        self
    }
}

impl Context for Options<'_> {
    fn cost(&mut self, board: &Board, base: Cost, edge: EdgeId, to: NodeId) -> Result<Option<Cost>> {
        match &mut self.cost {
            Some(f) => f(board, base, edge, to),
            None => accumulate(board, base, edge, to),
        }
    }

    fn admissible(&mut self, board: &Board, step: &Step<'_>) -> bool {
        self.admissible.as_mut().map_or(true, |f| f(board, step))
    }

    fn heuristic(&mut self, board: &Board, el: Element) -> Cost {
        self.heuristic.as_mut().map_or(0, |f| f(board, el))
    }

    fn exit(&mut self, found: &[NodeId]) -> bool {
        self.exit.as_mut().map_or(false, |f| f(found))
    }
}

/// The context of a search for everything reachable within a budget.
pub struct Explore<'a> {
    budget: Cost,
    allow: Option<Box<dyn Fn(&Board, &Step<'_>) -> bool + 'a>>,
}

impl<'a> Explore<'a> {
    pub fn new(budget: Cost) -> Explore<'a> {
        Explore { budget, allow: None }
    }

    /// Additionally require every step to satisfy the given predicate,
    /// e.g. to keep out of occupied cells.
    pub fn allow(mut self, f: impl Fn(&Board, &Step<'_>) -> bool + 'a) -> Self {
        self.allow = Some(Box::new(f));
        self
    }
}

impl Context for Explore<'_> {
    fn admissible(&mut self, board: &Board, step: &Step<'_>) -> bool {
        step.cost <= self.budget && self.allow.as_ref().map_or(true, |f| f(board, step))
    }
}

/// The context of a search for a cheapest path to a goal.
///
/// The heuristic is the grid distance to the goal, scaled by the least
/// cost of any step on the board, so that it never overestimates the
/// remaining cost. Without a grid layout, the heuristic is zero.
pub struct Seek<'a> {
    goal: NodeId,
    scale: Cost,
    allow: Option<Box<dyn Fn(&Board, &Step<'_>) -> bool + 'a>>,
}

impl<'a> Seek<'a> {
    pub fn new(board: &Board, goal: NodeId) -> Result<Seek<'a>> {
        let node = board.node(goal)?;
        if board.layout().is_some() && node.position().is_none() {
            return Err(Error::NoPosition(goal))
        }
        Ok(Seek { goal, scale: board.min_step_cost(), allow: None })
    }

    pub fn goal(&self) -> NodeId {
        self.goal
    }

    /// Additionally require every step to satisfy the given predicate.
    pub fn allow(mut self, f: impl Fn(&Board, &Step<'_>) -> bool + 'a) -> Self {
        self.allow = Some(Box::new(f));
        self
    }
}

impl Context for Seek<'_> {
    fn admissible(&mut self, board: &Board, step: &Step<'_>) -> bool {
        self.allow.as_ref().map_or(true, |f| f(board, step))
    }

    fn heuristic(&mut self, board: &Board, el: Element) -> Cost {
        match el {
            Element::Node(_) if board.layout().is_some() => board
                .distance(el, self.goal.into())
                .map_or(0, |d| d.saturating_mul(self.scale)),
            _ => 0
        }
    }

    fn exit(&mut self, found: &[NodeId]) -> bool {
        found.last() == Some(&self.goal)
    }
}

/// A path between two nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    /// The nodes of the path, from start to goal.
    pub nodes: Vec<NodeId>,
    /// The accumulated cost of the path, excluding the cost of the start.
    pub cost: Cost,
}

impl Path {
    pub fn start(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    pub fn goal(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    /// The number of steps along the path.
    pub fn steps(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

/// A tree is constructed as the result of a search on a board.
/// The root node of the tree is the start of the search and the paths
/// to the leaves are the cheapest paths found from the start to other
/// nodes of the board. The root itself is not among the found nodes.
#[derive(Clone, Debug)]
pub struct Tree {
    root: NodeId,
    found: Vec<(NodeId, Cost)>,
    parents: HashMap<NodeId, NodeId>,
    costs: HashMap<NodeId, Cost>,
}

impl Tree {
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The found nodes with their accumulated costs, in the order in
    /// which the search found them.
    pub fn iter(&self) -> impl Iterator<Item=(NodeId, Cost)> + '_ {
        self.found.iter().copied()
    }

    pub fn nodes(&self) -> impl Iterator<Item=NodeId> + '_ {
        self.found.iter().map(|(n, _)| *n)
    }

    pub fn cost(&self, n: NodeId) -> Option<Cost> {
        self.costs.get(&n).copied()
    }

    pub fn contains(&self, n: NodeId) -> bool {
        self.costs.contains_key(&n)
    }

    pub fn len(&self) -> usize {
        self.found.len()
    }

    pub fn is_empty(&self) -> bool {
        self.found.is_empty()
    }

    /// Trace a path from the given goal back to the root of the tree. The path
    /// is returned in the natural (i.e. reverse) order from start to goal.
    pub fn path(&self, goal: NodeId) -> Option<Path> {
        if goal == self.root {
            return Some(Path { nodes: vec![goal], cost: 0 })
        }
        let cost = self.cost(goal)?;
        let mut nodes = vec![goal];
        let mut current = goal;
        while current != self.root {
            current = *self.parents.get(&current)?;
            nodes.push(current);
        }
        nodes.reverse();
        Some(Path { nodes, cost })
    }
}

/// Find all nodes reachable from `start` at an accumulated cost of at
/// most `budget`.
pub fn explore(board: &Board, start: NodeId, budget: Cost) -> Result<Tree> {
    astar::tree(board, start, &mut Explore::new(budget))
}

/// Find a cheapest path from `start` to `destination`, if there is one.
pub fn path(board: &Board, start: NodeId, destination: NodeId) -> Result<Option<Path>> {
    board.node(start)?;
    if start == destination {
        return Ok(Some(Path { nodes: vec![start], cost: 0 }))
    }
    let mut ctx = Seek::new(board, destination)?;
    Ok(astar::tree(board, start, &mut ctx)?.path(destination))
}
