//! ASCII diagram of a [`Graph`].
//!
//! Nodes are stacked in one column in ascending id order, [`NODE_GAP`] rows
//! apart. Each edge gets its own lane: edges to a later node leave to the
//! right, run down and enter the target from above (`V`); edges to an earlier
//! node leave to the left, run up and enter from below (`^`). The weight sits
//! on the third cell of the vertical run. Self-loops are not drawn.

use std::collections::HashMap;
use std::fmt;

use dijkstra::Graph;
use dijkstra::NodeId;

pub const NODE_GAP: usize = 9;

const INITIAL_WIDTH: usize = 3;
const CELL_WIDTH: usize = 5;
const LABEL_STEP: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Cell {
    Empty,
    Horizontal,
    Vertical,
    Corner,
    Crossing,
    ArrowDown,
    ArrowUp,
    Node(NodeId),
    Weight(f64),
}

impl Cell {
    fn under_horizontal(self) -> Cell {
        match self {
            Cell::Vertical | Cell::Crossing => Cell::Crossing,
            Cell::Corner => Cell::Corner,
            _ => Cell::Horizontal,
        }
    }

    fn under_vertical(self, replacement: Cell) -> Cell {
        match self {
            Cell::Horizontal | Cell::Crossing => Cell::Crossing,
            Cell::Corner => Cell::Corner,
            _ => replacement,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Canvas {
    rows: Vec<Vec<Cell>>,
    width: usize,
    right_lanes: usize,
    left_lanes: usize,
}

impl Canvas {
    fn new(node_count: usize) -> Self {
        Self {
            rows: vec![vec![Cell::Empty; INITIAL_WIDTH]; node_count * NODE_GAP],
            width: INITIAL_WIDTH,
            right_lanes: 0,
            left_lanes: 0,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    #[inline]
    fn center(&self) -> usize {
        self.width / 2
    }

    /// Row of the `index`-th node.
    #[inline]
    pub fn node_row(index: usize) -> usize {
        NODE_GAP / 2 + NODE_GAP * index
    }

    fn widen(&mut self) {
        for row in &mut self.rows {
            row.insert(0, Cell::Empty);
            row.insert(0, Cell::Empty);
            row.extend([Cell::Empty; 2]);
        }
        self.width += 4;
    }

    fn place_node(&mut self, index: usize, id: NodeId) {
        let center = self.center();
        self.rows[Self::node_row(index)][center] = Cell::Node(id);
    }

    fn route_down(&mut self, from: usize, to: usize, weight: f64) {
        self.right_lanes += 1;
        let center = self.center();
        let mut y = Self::node_row(from);
        let end = Self::node_row(to);

        let x = center + self.right_lanes * 2;
        for col in (center + 1)..=x {
            let cell = &mut self.rows[y][col];
            *cell = cell.under_horizontal();
        }
        self.rows[y][x] = Cell::Corner;

        for step in 1..=(end - 3 - y) {
            let label = if step == LABEL_STEP {
                Cell::Weight(weight)
            } else {
                Cell::Vertical
            };
            let cell = &mut self.rows[y + 1][x];
            *cell = cell.under_vertical(label);
            y += 1;
        }

        self.rows[y][x] = Cell::Corner;
        for col in (center + 1)..x {
            let cell = &mut self.rows[y][col];
            *cell = cell.under_horizontal();
        }
        self.rows[y][center] = Cell::Corner;

        for row in (y + 1)..end {
            self.rows[row][center] = Cell::Vertical;
        }
        self.rows[end - 1][center] = Cell::ArrowDown;
    }

    fn route_up(&mut self, from: usize, to: usize, weight: f64) {
        self.left_lanes += 1;
        let center = self.center();
        let mut y = Self::node_row(from);
        let end = Self::node_row(to);

        let x = center - self.left_lanes * 2;
        for col in x..center {
            let cell = &mut self.rows[y][col];
            *cell = cell.under_horizontal();
        }
        self.rows[y][x] = Cell::Corner;

        for step in 1..=(y - end - 3) {
            let label = if step == LABEL_STEP {
                Cell::Weight(weight)
            } else {
                Cell::Vertical
            };
            let cell = &mut self.rows[y - 1][x];
            *cell = cell.under_vertical(label);
            y -= 1;
        }

        self.rows[y][x] = Cell::Corner;
        for col in (x + 1)..center {
            let cell = &mut self.rows[y][col];
            *cell = cell.under_horizontal();
        }
        self.rows[y][center] = Cell::Corner;

        for row in (end + 1)..y {
            self.rows[row][center] = Cell::Vertical;
        }
        self.rows[end + 1][center] = Cell::ArrowUp;
    }
}

pub fn render(graph: &Graph) -> Canvas {
    let index: HashMap<NodeId, usize> = graph
        .nodes()
        .enumerate()
        .map(|(i, id)| (id, i))
        .collect();

    let mut canvas = Canvas::new(graph.node_count());
    for (id, &i) in &index {
        canvas.place_node(i, *id);
    }

    for (from, edge) in graph.edges() {
        let (Some(&src), Some(&dst)) = (index.get(&from), index.get(&edge.to)) else {
            continue;
        };
        if src == dst {
            continue;
        }
        canvas.widen();
        if src < dst {
            canvas.route_down(src, dst, edge.weight);
        } else {
            canvas.route_up(src, dst, edge.weight);
        }
    }

    canvas
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut line = String::with_capacity(self.width * CELL_WIDTH);
        for row in &self.rows {
            line.clear();
            for (col, cell) in row.iter().enumerate() {
                let continues = col > 0 && row[col - 1] != Cell::Empty;
                let text = match *cell {
                    Cell::Empty => String::new(),
                    Cell::Horizontal => "-----".to_string(),
                    Cell::Crossing => "----=".to_string(),
                    Cell::Corner if continues => "----+".to_string(),
                    Cell::Corner => "+".to_string(),
                    Cell::Vertical => "|".to_string(),
                    Cell::ArrowDown => "V".to_string(),
                    Cell::ArrowUp => "^".to_string(),
                    Cell::Node(id) => format!("[{id}]"),
                    Cell::Weight(w) => w.to_string(),
                };
                line.push_str(&format!("{text:>CELL_WIDTH$}"));
            }
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(canvas: &Canvas) -> Vec<String> {
        canvas.to_string().lines().map(str::to_string).collect()
    }

    #[test]
    fn single_forward_edge() {
        let graph = Graph::from_edges(&[(1, 2, 7.0)]);
        let canvas = render(&graph);
        assert_eq!(canvas.height(), 2 * NODE_GAP);
        assert_eq!(canvas.width(), 7);

        let out = lines(&canvas);
        let pad = " ".repeat(15);
        assert_eq!(out[4], format!("{pad}  [1]---------+"));
        assert_eq!(out[5], format!("{pad}{}    |", " ".repeat(10)));
        assert_eq!(out[7], format!("{pad}{}    7", " ".repeat(10)));
        assert_eq!(out[10], format!("{pad}    +---------+"));
        assert_eq!(out[11], format!("{pad}    |"));
        assert_eq!(out[12], format!("{pad}    V"));
        assert_eq!(out[13], format!("{pad}  [2]"));
        assert!(out[0].is_empty() && out[17].is_empty());
    }

    #[test]
    fn backward_edge_enters_from_below() {
        let graph = Graph::from_edges(&[(2, 1, 5.0)]);
        let canvas = render(&graph);
        let center = canvas.width() / 2;
        let top = Canvas::node_row(0);
        let bottom = Canvas::node_row(1);

        assert_eq!(canvas.cell(top, center), Some(Cell::Node(1)));
        assert_eq!(canvas.cell(bottom, center), Some(Cell::Node(2)));
        assert_eq!(canvas.cell(top + 1, center), Some(Cell::ArrowUp));
        assert_eq!(canvas.cell(top + 3, center), Some(Cell::Corner));
        assert_eq!(canvas.cell(bottom, center - 2), Some(Cell::Corner));
        assert_eq!(canvas.cell(bottom - 3, center - 2), Some(Cell::Weight(5.0)));
    }

    #[test]
    fn self_loops_are_not_drawn() {
        let graph = Graph::from_edges(&[(4, 4, 3.0)]);
        let canvas = render(&graph);
        assert_eq!(canvas.width(), INITIAL_WIDTH);
        assert_eq!(lines(&canvas)[Canvas::node_row(0)], "       [4]");
    }

    #[test]
    fn every_edge_widens_and_gets_its_own_lane() {
        let graph = Graph::from_edges(&[(1, 3, 1.0), (1, 2, 2.0), (3, 1, 4.0), (2, 1, 8.0)]);
        let canvas = render(&graph);
        assert_eq!(canvas.width(), INITIAL_WIDTH + 4 * 4);

        let center = canvas.width() / 2;
        let src = Canvas::node_row(0);
        assert_eq!(canvas.cell(src, center + 2), Some(Cell::Corner));
        assert_eq!(canvas.cell(src, center + 4), Some(Cell::Corner));
        let turn = Canvas::node_row(1) - 3;
        assert_eq!(canvas.cell(turn, center + 2), Some(Cell::Crossing));
        assert_eq!(canvas.cell(src + 3, center + 2), Some(Cell::Weight(1.0)));
        assert_eq!(canvas.cell(src + 3, center + 4), Some(Cell::Weight(2.0)));

        let text = canvas.to_string();
        assert!(text.contains("[1]") && text.contains("[2]") && text.contains("[3]"));
        assert_eq!(text.matches('V').count(), 2);
        // Both edges into node 1 share its entry point.
        assert_eq!(text.matches('^').count(), 1);
    }

    #[test]
    fn empty_graph_renders_nothing() {
        assert_eq!(render(&Graph::new()).to_string(), "");
    }
}
