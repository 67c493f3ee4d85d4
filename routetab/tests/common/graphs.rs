use routetab::Topology;

/// 0 - 1 - 2 - 3 chain with an expensive shortcut 0 - 3
pub fn chain_with_shortcut() -> Topology {
    Topology::from_edges(4, [(0, 1, 1.0), (1, 2, 2.0), (2, 3, 1.0), (0, 3, 10.0)])
}

pub fn simple_weighted() -> Topology {
    Topology::from_edges(
        5,
        [
            (0, 1, 2.0),
            (0, 2, 1.0),
            (1, 2, 4.0),
            (1, 3, 5.0),
            (2, 3, 100.0),
            (2, 4, 8.0),
            (3, 4, 1.0),
        ],
    )
}

/// node 2 has no links
pub fn disconnected() -> Topology {
    Topology::from_edges(3, [(0, 1, 1.0)])
}

pub fn single_negative_edge() -> Topology {
    Topology::from_edges(2, [(0, 1, -5.0)])
}

/// negative edge hanging off a path, no cycle through it
pub fn negative_spur() -> Topology {
    Topology::from_edges(4, [(0, 1, 1.0), (1, 2, -5.0), (0, 3, 2.0), (2, 3, 20.0)])
}

/// triangle 0 - 1 - 2 with total weight -1, a tail 2 - 3, and a separate component 4 - 5
pub fn negative_triangle() -> Topology {
    Topology::from_edges(
        6,
        [(0, 1, 1.0), (1, 2, 1.0), (2, 0, -3.0), (2, 3, 4.0), (4, 5, 2.0)],
    )
}

/// two negative edges meet at node 0, closing the triangle at -9
pub fn negative_triangle_at_source() -> Topology {
    Topology::from_edges(3, [(0, 1, -5.0), (1, 2, 1.0), (2, 0, -5.0)])
}

/// 1 and 2 are each cheapest to reach through the other, the triangle itself sums to 1
pub fn crossing_negative_link() -> Topology {
    Topology::from_edges(3, [(0, 1, 3.0), (0, 2, 3.0), (1, 2, -5.0)])
}

/// two parallel edges whose round trip is negative
pub fn negative_parallel_pair() -> Topology {
    Topology::from_edges(3, [(0, 1, -5.0), (0, 1, 1.0), (1, 2, 1.0)])
}

/// two equal-cost paths from 0 to 3
pub fn equal_cost_diamond() -> Topology {
    Topology::from_edges(4, [(0, 1, 1.0), (0, 2, 1.0), (1, 3, 1.0), (2, 3, 1.0)])
}
