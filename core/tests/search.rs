mod common;

use boardkit::board::{ Board, Cost, NodeId, IMPASSABLE };
use boardkit::grid::{ Layout, Offset };
use boardkit::search::{ self, astar, Explore, Seek };

use quickcheck::*;

use std::collections::HashSet;

use common::*;

#[test]
fn explore_hex_neighbours() {
    let g = hexes(3, 3);
    let center = g.at(1, 1);
    let t = search::explore(&g.board, center, 1).unwrap();
    let found: HashSet<Offset> = t.iter()
        .inspect(|(_, c)| assert_eq!(*c, 1))
        .map(|(n, _)| g.board.node(n).unwrap().position().unwrap())
        .collect();
    let expected: HashSet<Offset> = Layout::OddRow.neighbours(Offset::new(1, 1)).into_iter().collect();
    assert_eq!(t.len(), 6);
    assert_eq!(found, expected);
}

#[test]
fn explore_excludes_expensive_neighbour() {
    let mut g = hexes(3, 3);
    let center = g.at(1, 1);
    let costly = g.at(2, 1);
    g.board.set_node_cost(costly, 10).unwrap();
    let t = search::explore(&g.board, center, 1).unwrap();
    assert_eq!(t.len(), 5);
    assert!(!t.contains(costly));
}

#[test]
fn wall_blocks_row() {
    let mut g = hexes(5, 1);
    let wall = g.board.edge_between(g.at(2, 0), g.at(3, 0)).unwrap();
    g.board.set_edge_cost(wall, IMPASSABLE).unwrap();
    assert_eq!(search::path(&g.board, g.at(0, 0), g.at(4, 0)), Ok(None));
    let mut seek = Seek::new(&g.board, g.at(4, 0)).unwrap();
    let t = astar::tree(&g.board, g.at(0, 0), &mut seek).unwrap();
    assert!(!t.contains(g.at(4, 0)));
    let t = search::explore(&g.board, g.at(0, 0), 10).unwrap();
    assert!(t.contains(g.at(1, 0)));
    assert!(t.contains(g.at(2, 0)));
    assert!(!t.contains(g.at(3, 0)));
    assert!(!t.contains(g.at(4, 0)));
}

#[test]
fn hex_path_follows_grid_distance() {
    let g = hexes(6, 6);
    for (o, n) in g.cells() {
        let p = search::path(&g.board, g.at(0, 0), n).unwrap().unwrap();
        assert_eq!(p.cost, Layout::OddRow.distance(Offset::new(0, 0), o));
        assert_eq!(g.board.path_cost(&p.nodes), Ok(Some(p.cost)));
        assert_eq!(p.goal(), Some(n));
    }
}

#[test]
fn path_avoids_occupied_cells() {
    let g = squares(3, 3);
    let occupied = g.at(1, 1);
    let mut seek = Seek::new(&g.board, g.at(2, 1)).unwrap()
        .allow(move |_, step| step.node != occupied);
    let t = astar::tree(&g.board, g.at(0, 1), &mut seek).unwrap();
    let p = t.path(g.at(2, 1)).unwrap();
    assert_eq!(p.cost, 4);
    assert!(!p.nodes.contains(&occupied));
}

#[test]
fn edges_and_distances_are_symmetric() {
    for g in &[hexes(4, 4), squares(4, 4)] {
        let b = &g.board;
        for x in b.nodes() {
            for (y, e) in b.neighbours(x).unwrap() {
                assert_eq!(b.edge_between(x, y), Ok(e));
                assert_eq!(b.edge_between(y, x), Ok(e));
                assert_eq!(b.distance(x.into(), y.into()), Ok(1));
            }
            for y in b.nodes() {
                assert_eq!(b.distance(x.into(), y.into()), b.distance(y.into(), x.into()));
            }
        }
    }
}

/// A small board with random costs and connections.
#[derive(Clone, Debug)]
struct Random {
    costs: Vec<u8>,
    links: Vec<(u8, u8, u8)>,
}

impl Arbitrary for Random {
    fn arbitrary<G: Gen>(g: &mut G) -> Random {
        let n = 2 + usize::arbitrary(g) % 8;
        let costs = (0 .. n).map(|_| u8::arbitrary(g)).collect();
        let links = (0 .. usize::arbitrary(g) % 16).map(|_| Arbitrary::arbitrary(g)).collect();
        Random { costs, links }
    }
}

impl Random {
    /// Node costs in `[min, 9]`, edge costs in `[0, 4]`, with an
    /// occasional impassable edge.
    fn board(&self, min: u8) -> (Board, Vec<NodeId>) {
        let mut b = Board::new();
        let ns: Vec<NodeId> = self.costs.iter()
            .map(|c| b.add_node((min + c % (10 - min)) as i64))
            .collect();
        for (x, y, c) in &self.links {
            let (x, y) = (ns[*x as usize % ns.len()], ns[*y as usize % ns.len()]);
            let cost = if *c % 7 == 6 { IMPASSABLE } else { (*c % 5) as Cost };
            let _ = b.connect(x, y, cost, 0);
        }
        (b, ns)
    }
}

/// The least cost of any simple path from `from` to `to`.
fn brute_force(b: &Board, from: NodeId, to: NodeId) -> Option<Cost> {
    fn go(b: &Board, at: NodeId, to: NodeId, cost: Cost, seen: &mut Vec<NodeId>) -> Option<Cost> {
        if at == to {
            return Some(cost)
        }
        let mut best = None;
        for (n, e) in b.neighbours(at).unwrap() {
            if seen.contains(&n) {
                continue
            }
            if let Some(step) = b.step_cost(e, n).unwrap() {
                seen.push(n);
                if let Some(c) = go(b, n, to, cost + step, seen) {
                    best = Some(best.map_or(c, |x: Cost| x.min(c)));
                }
                seen.pop();
            }
        }
        best
    }
    go(b, from, to, 0, &mut vec![from])
}

#[test]
fn prop_path_is_optimal() {
    fn prop(r: Random) -> bool {
        let (b, ns) = r.board(0);
        ns.iter().all(|d| {
            let p = search::path(&b, ns[0], *d).unwrap();
            p.map(|p| p.cost) == brute_force(&b, ns[0], *d)
        })
    }
    quickcheck(prop as fn(Random) -> bool);
}

#[test]
fn prop_explore_cost_monotone() {
    fn prop(r: Random, budget: u8) -> bool {
        let (b, ns) = r.board(1);
        let budget = (budget % 30) as Cost;
        let t = astar::tree(&b, ns[0], &mut Explore::new(budget)).unwrap();
        let monotone = t.iter().all(|(n, c)| {
            let p = t.path(n).unwrap();
            let prefixes: Vec<Option<Cost>> = (1 ..= p.nodes.len())
                .map(|k| b.path_cost(&p.nodes[.. k]).unwrap())
                .collect();
            c <= budget &&
            prefixes.last() == Some(&Some(c)) &&
            prefixes.windows(2).all(|w| w[0] < w[1]) &&
            p.nodes[1 ..].iter().all(|m| t.contains(*m))
        });
        monotone
    }
    quickcheck(prop as fn(Random, u8) -> bool);
}
