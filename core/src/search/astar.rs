
use std::collections::{ HashMap, HashSet };

use crate::board::{ Board, Cost, NodeId };
use crate::error::Result;
use crate::queue::PriorityQueue;

use super::{ Context, Step, Tree };

/// The working state of a single search.
struct Search<'a, C> {
    board: &'a Board,
    ctx: &'a mut C,
    start: NodeId,
    /// The frontier, prioritised by the negated estimate of total cost.
    open: PriorityQueue<NodeId>,
    /// Tentative, and for found nodes final, predecessors.
    parents: HashMap<NodeId, NodeId>,
    /// Tentative, and for found nodes final, accumulated costs.
    costs: HashMap<NodeId, Cost>,
    found: Vec<NodeId>,
    closed: HashSet<NodeId>,
}

impl<C: Context> Search<'_, C> {
    fn expand(&mut self, from: NodeId) -> Result<()> {
        let board = self.board;
        let base = self.costs.get(&from).copied().unwrap_or(0);
        for (to, edge) in board.neighbours(from)? {
            if to == self.start || self.closed.contains(&to) {
                continue
            }
            let cost = match self.ctx.cost(board, base, edge, to)? {
                Some(c) => c,
                None => continue
            };
            let path = self.path_via(from, to);
            let step = Step { node: to, edge, path: &path, cost };
            if !self.ctx.admissible(board, &step) {
                log::trace!("{} rejected at cost {}", to, cost);
                continue
            }
            let estimate = cost as i64
                + self.ctx.heuristic(board, to.into()) as i64
                + self.ctx.heuristic(board, edge.into()) as i64;
            if self.open.insert(to, -estimate, true) {
                self.parents.insert(to, from);
                self.costs.insert(to, cost);
            }
        }
        Ok(())
    }

    /// The tentative path from the start to `to`, via the found node `from`.
    fn path_via(&self, from: NodeId, to: NodeId) -> Vec<NodeId> {
        let mut path = vec![to, from];
        let mut current = from;
        while current != self.start {
            match self.parents.get(&current) {
                Some(p) => { path.push(*p); current = *p; }
                None => break
            }
        }
        path.reverse();
        path
    }
}

/// Beginning at the given start node, perform a cost-aware search across
/// the board, subject to the constraints of the given context, returning
/// the resulting search tree from which paths may be extracted.
///
/// The search stops when any of the following conditions is met:
///
///   * The `exit` function of the context signals termination.
///   * The reachable part of the board has been exhaustively searched.
///
/// Nodes are found in the order of their accumulated cost plus the
/// heuristic estimate, with ties broken in the order in which nodes
/// entered the frontier. Once found, the cost of a node is final.
pub fn tree<C: Context>(board: &Board, start: NodeId, ctx: &mut C) -> Result<Tree> {
    board.node(start)?;
    let mut s = Search {
        board,
        ctx,
        start,
        open: PriorityQueue::new(),
        parents: HashMap::new(),
        costs: HashMap::new(),
        found: Vec::new(),
        closed: HashSet::new(),
    };
    s.expand(start)?;
    while !s.open.is_empty() {
        let node = s.open.pop()?;
        s.closed.insert(node);
        s.found.push(node);
        log::trace!("found {} at cost {}", node, s.costs.get(&node).copied().unwrap_or(0));
        if s.ctx.exit(&s.found) {
            log::debug!("search from {} exited after {} nodes", start, s.found.len());
            break
        }
        s.expand(node)?;
    }
    let Search { found, mut parents, mut costs, closed, .. } = s;
    parents.retain(|n, _| closed.contains(n));
    costs.retain(|n, _| closed.contains(n));
    let found = found.into_iter()
        .map(|n| (n, costs.get(&n).copied().unwrap_or(0)))
        .collect();
    Ok(Tree { root: start, found, parents, costs })
}
