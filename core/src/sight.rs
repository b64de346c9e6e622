//! Line of sight across the cells of a board.
//!
//! Visibility is a search in which the cost of a cell is the opacity
//! accumulated along the clearest line from the origin to that cell,
//! rather than the cost of moving there.

pub mod trace;

pub use self::trace::{ trace, trace_between, Trace };

use crate::board::{ Board, Element, NodeId, Opacity };
use crate::error::Result;
use crate::geo::{ Line, Point };
use crate::search::{ astar, Options };

/// The default opacity at which sight is blocked.
pub const DEFAULT_CUTOFF: Opacity = 1;

type PointsFn<'a> = Box<dyn Fn(&Board, Element) -> Result<Vec<Point>> + 'a>;
type OpacityFn<'a> = Box<dyn Fn(&Board, Element) -> Result<Opacity> + 'a>;

/// The parameters of a visibility query.
pub struct Sight<'a> {
    distance: Option<u32>,
    cutoff: Opacity,
    origin_points: Option<Vec<Point>>,
    target_points: Option<PointsFn<'a>>,
    opacity: Option<OpacityFn<'a>>,
}

impl Default for Sight<'_> {
    fn default() -> Self {
        Sight {
            distance: None,
            cutoff: DEFAULT_CUTOFF,
            origin_points: None,
            target_points: None,
            opacity: None,
        }
    }
}

impl<'a> Sight<'a> {
    pub fn new() -> Sight<'a> {
        Sight::default()
    }

    /// Limit the sight to cells within the given grid distance.
    pub fn with_distance(mut self, distance: u32) -> Self {
        self.distance = Some(distance);
        self
    }

    /// Only cells seen through an accumulated opacity below the cutoff
    /// are visible.
    pub fn with_cutoff(mut self, cutoff: Opacity) -> Self {
        self.cutoff = cutoff;
        self
    }

    /// Look from the given points instead of the center of the origin.
    pub fn with_origin_points(mut self, points: Vec<Point>) -> Self {
        self.origin_points = Some(points);
        self
    }

    /// Look at the points given by `f` instead of the centers of targets.
    pub fn with_target_points<F>(mut self, f: F) -> Self
    where F: Fn(&Board, Element) -> Result<Vec<Point>> + 'a
    {
        self.target_points = Some(Box::new(f));
        self
    }

    /// Use the opacities given by `f` instead of those of the board.
    pub fn with_opacity<F>(mut self, f: F) -> Self
    where F: Fn(&Board, Element) -> Result<Opacity> + 'a
    {
        self.opacity = Some(Box::new(f));
        self
    }

    pub fn distance(&self) -> Option<u32> {
        self.distance
    }

    pub fn cutoff(&self) -> Opacity {
        self.cutoff
    }

    fn opacity_of(&self, board: &Board, el: Element) -> Result<Opacity> {
        match &self.opacity {
            Some(f) => f(board, el),
            None => board.opacity_of(el),
        }
    }

    fn origin_points(&self, board: &Board, origin: NodeId) -> Result<Vec<Point>> {
        match &self.origin_points {
            Some(ps) => Ok(ps.clone()),
            None => Ok(vec![board.center_of(origin.into())?]),
        }
    }

    fn target_points(&self, board: &Board, target: Element) -> Result<Vec<Point>> {
        match &self.target_points {
            Some(f) => f(board, target),
            None => Ok(vec![board.center_of(target)?]),
        }
    }
}

/// The opacity of the clearest line from the cell `origin` to the
/// `target`, i.e. the least sum of the opacities of the elements crossed
/// in between, over all pairs of origin and target points and both sides
/// of lines through corners. Neither the origin nor the target contribute.
///
/// Lines that run off the board before reaching the target do not count;
/// if no line reaches the target, its opacity is `Opacity::MAX`.
pub fn opacity(board: &Board, origin: NodeId, target: Element, sight: &Sight<'_>) -> Result<Opacity> {
    if target == Element::Node(origin) {
        return Ok(0)
    }
    let from = sight.origin_points(board, origin)?;
    let to = sight.target_points(board, target)?;
    let mut best: Option<Opacity> = None;
    for a in &from {
        for b in &to {
            for w in trace::walks(board, origin, Some(target), &Line::new(*a, *b))? {
                if !w.reached {
                    continue
                }
                let mut sum: Opacity = 0;
                for el in w.elements.iter().filter(|el| **el != target) {
                    sum = sum.saturating_add(sight.opacity_of(board, *el)?);
                }
                best = Some(best.map_or(sum, |o| o.min(sum)));
            }
        }
    }
    if best.is_none() {
        log::debug!("no line from {} reaches {}", origin, target);
    }
    Ok(best.unwrap_or(Opacity::MAX))
}

/// The elements visible from the cell `origin`, each with the opacity
/// through which it is seen.
///
/// The origin comes first at opacity 0, followed by the visible cells in
/// the order in which they were found and finally the edges bordering any
/// visible cell, at the least opacity of their visible endpoints.
pub fn visible(board: &Board, origin: NodeId, sight: &Sight<'_>) -> Result<Vec<(Element, Opacity)>> {
    board.node(origin)?;
    if sight.distance.is_some() {
        board.distance(origin.into(), origin.into())?;
    }
    let cutoff = sight.cutoff;
    let budget = sight.distance;
    let mut ctx = Options::new()
        .cost(|b, _, _, to| opacity(b, origin, to.into(), sight).map(Some))
        .admissible(move |b, step| step.cost < cutoff && budget.map_or(true, |d|
            b.distance(origin.into(), step.node.into()).map_or(false, |x| x <= d)));
    let tree = astar::tree(board, origin, &mut ctx)?;
    let seen = |n: NodeId| if n == origin { Some(0) } else { tree.cost(n) };
    let mut out = vec![(Element::Node(origin), 0)];
    out.extend(tree.iter().map(|(n, o)| (Element::Node(n), o)));
    for e in board.edges() {
        let (a, b) = board.edge(e)?.nodes();
        let o = match (seen(a), seen(b)) {
            (Some(x), Some(y)) => x.min(y),
            (Some(x), None) | (None, Some(x)) => x,
            (None, None) => continue,
        };
        out.push((Element::Edge(e), o));
    }
    log::debug!("{} sees {} cells", origin, tree.len());
    Ok(out)
}

/// The elements visible from the cell `origin`, in the order of [`visible`].
///
/// [`visible`]: fn.visible.html
pub fn line_of_sight(board: &Board, origin: NodeId, sight: &Sight<'_>) -> Result<Vec<Element>> {
    Ok(visible(board, origin, sight)?.into_iter().map(|(el, _)| el).collect())
}
