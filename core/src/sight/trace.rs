//! Tracing lines across the shapes of board cells.

use either::Either;

use std::collections::HashSet;
use std::iter;

use crate::board::{ Board, Element, NodeId };
use crate::error::{ Error, Result };
use crate::geo::{ Line, Point, EPSILON };

/// The distance by which a line through a corner is shifted to either
/// side, relative to the edge length of the origin cell.
const OFFSET: f64 = 0.001;

/// The elements crossed by a line, in the order in which they are crossed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Trace {
    /// The line crosses the board unambiguously.
    Single(Vec<Element>),
    /// The line passes through a corner of a cell, so the elements it
    /// crosses depend on the side on which it passes. Holds the traces of
    /// the line shifted slightly to its left and to its right.
    Split(Vec<Element>, Vec<Element>),
}

impl Trace {
    pub fn is_split(&self) -> bool {
        match self {
            Trace::Single(_) => false,
            Trace::Split(..) => true,
        }
    }

    /// The element sequences of all branches of the trace.
    pub fn branches(&self) -> impl Iterator<Item=&[Element]> + '_ {
        match self {
            Trace::Single(a) =>
                Either::Left(iter::once(a.as_slice())),
            Trace::Split(a, b) =>
                Either::Right(iter::once(a.as_slice()).chain(iter::once(b.as_slice()))),
        }
    }
}

/// The result of walking a line from cell to cell.
#[derive(Debug)]
pub(super) struct Walk {
    pub elements: Vec<Element>,
    /// Whether the walk arrived at its destination or at the cell
    /// containing the end of the line.
    pub reached: bool,
    /// Whether the line left some cell through one of its corners.
    pub corner: bool,
}

/// Walk along `line` from the cell `origin`, leaving every cell through
/// the side the line exits by and entering the cell on the other side of
/// the corresponding edge.
pub(super) fn walk(
    board: &Board,
    origin: NodeId,
    destination: Option<Element>,
    line: &Line
) -> Result<Walk> {
    let r = line.vector();
    let rr = r.dot(&r);
    let param = |p: Point| if rr == 0. { 0. } else { (p - line.start()).dot(&r) / rr };
    let mut visited = HashSet::new();
    visited.insert(origin);
    let mut walk = Walk { elements: Vec::new(), reached: false, corner: false };
    let mut current = origin;
    let mut at = 0.;
    loop {
        let shape = board.node(current)?.shape().ok_or(Error::NoShape(current))?;
        if shape.contains(line.end()) {
            walk.reached = true;
            return Ok(walk)
        }
        // The exit is the hit ahead of the entry that is closest to the end.
        let exit = shape.intersections(line).into_iter()
            .map(|p| (param(p), p))
            .filter(|(t, _)| *t > at + EPSILON)
            .fold(None, |best: Option<(f64, Point)>, (t, p)| match best {
                Some((bt, _)) if bt >= t => best,
                _ => Some((t, p)),
            });
        let (t, hit) = match exit {
            Some(x) => x,
            None => {
                log::debug!("no exit from {} along {:?}", current, line);
                return Ok(walk)
            }
        };
        if shape.is_vertex(hit) {
            walk.corner = true;
        }
        let mut next = None;
        for side in shape.boundary_at(hit) {
            if let Some(e) = board.boundary_edge(current, side)? {
                if let Some(n) = board.edge(e)?.other(current) {
                    if !visited.contains(&n) {
                        next = Some((e, n));
                        break
                    }
                }
            }
        }
        let (edge, node) = match next {
            Some(x) => x,
            None => {
                log::debug!("line leaves the board at {} through {:?}", current, hit);
                return Ok(walk)
            }
        };
        walk.elements.push(edge.into());
        if destination == Some(Element::Edge(edge)) {
            walk.reached = true;
            return Ok(walk)
        }
        walk.elements.push(node.into());
        if destination == Some(Element::Node(node)) {
            walk.reached = true;
            return Ok(walk)
        }
        visited.insert(node);
        current = node;
        at = t;
    }
}

/// Walk along the line, and if it passes through a corner, along the line
/// shifted to either side instead.
pub(super) fn walks(
    board: &Board,
    origin: NodeId,
    destination: Option<Element>,
    line: &Line
) -> Result<Vec<Walk>> {
    let w = walk(board, origin, destination, line)?;
    if !w.corner {
        return Ok(vec![w])
    }
    let shape = board.node(origin)?.shape().ok_or(Error::NoShape(origin))?;
    let d = OFFSET * shape.edge_length();
    log::debug!("line {:?} from {} passes a corner, tracing both sides", line, origin);
    Ok(vec![
        walk(board, origin, destination, &line.offset(d))?,
        walk(board, origin, destination, &line.offset(-d))?,
    ])
}

/// The elements crossed by a line starting in the cell `origin`, up to
/// and including the cell containing the end of the line. The origin
/// itself is not included. If the line runs off the board, the elements
/// crossed until then are returned.
pub fn trace(board: &Board, origin: NodeId, line: &Line) -> Result<Vec<Element>> {
    walk(board, origin, None, line).map(|w| w.elements)
}

/// The elements crossed by a line from the cell `origin` towards the
/// `destination`, which ends the trace when crossed. Lines through corners
/// of cells yield a [`Trace::Split`].
///
/// [`Trace::Split`]: enum.Trace.html#variant.Split
pub fn trace_between(
    board: &Board,
    origin: NodeId,
    destination: Element,
    line: &Line
) -> Result<Trace> {
    let mut ws = walks(board, origin, Some(destination), line)?.into_iter().map(|w| w.elements);
    match (ws.next(), ws.next()) {
        (Some(a), Some(b)) => Ok(Trace::Split(a, b)),
        (Some(a), None) => Ok(Trace::Single(a)),
        _ => Ok(Trace::Single(Vec::new())),
    }
}
