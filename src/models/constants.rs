pub const HEADING_COUNT: u8 = 16;

/// Index steps covered by a single turning move (90 degrees).
pub const TURN_STEPS: i32 = 4;

/// Cells scanned along a broadside axis.
pub const CANNON_RANGE: i32 = 3;

pub const MAX_SHOTS_PER_SIDE: u8 = 2;
pub const PHASES_PER_TURN: usize = 4;

pub const DEFAULT_ARENA_SIZE: i32 = 20;
pub const DEFAULT_VESSEL_COUNT: usize = 4;
pub const DEFAULT_TURNS: u32 = 3;

/// The only headings at which a broadside can be resolved.
pub const CARDINAL_HEADINGS: [u8; 4] = [2, 6, 10, 14];

/// Forward unit step for each of the 16 headings. Format: (delta_x, delta_y).
/// Heading 2 faces +x and the index grows clockwise with y pointing up, so
/// each entry is (round(cos t), round(-sin t)) for t = (index - 2) * 22.5 deg.
pub const HEADING_VECTORS: [(i32, i32); HEADING_COUNT as usize] = [
    (1, 1),   // 0
    (1, 0),   // 1
    (1, 0),   // 2: east
    (1, 0),   // 3
    (1, -1),  // 4
    (0, -1),  // 5
    (0, -1),  // 6: south
    (0, -1),  // 7
    (-1, -1), // 8
    (-1, 0),  // 9
    (-1, 0),  // 10: west
    (-1, 0),  // 11
    (-1, 1),  // 12
    (0, 1),   // 13
    (0, 1),   // 14: north
    (0, 1),   // 15
];

/// Broadside step per cardinal heading. Format: (heading, left, right).
pub const BROADSIDE_AXES: [(u8, (i32, i32), (i32, i32)); 4] = [
    (2, (0, 1), (0, -1)),
    (6, (1, 0), (-1, 0)),
    (10, (0, -1), (0, 1)),
    (14, (-1, 0), (1, 0)),
];
