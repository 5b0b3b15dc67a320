//! Built-in level plans, played in order
//!
//! Legend: `.` empty, `#` wall, `+` lava, `@` player, `o` coin,
//! `=` sideways lava, `|` bouncing lava, `v` dripping lava.

pub const FIRST_STEPS: &str = "\
......................
..#................#..
..#..............=.#..
..#.........o.o....#..
..#.@......#####...#..
..#####............#..
......#++++++++++++#..
......##############..
......................
";

pub const SKY_ISLANDS: &str = "\
.................................................................................
.................................................................................
.................................................................................
.................................................................................
.................................................................................
.................................................................................
..................................................................###............
...................................................##......##....##+##...........
....................................o.o......##..................#+++#...........
.................................................................##+##...........
...................................#.........................o...#+#.............
...................................#..............................##.............
...................................##......................o......#..............
.....................................................#....o......#o..............
.......................#......................###.....#...o.......##.............
.......................#.....................#####.......................o.......
...............................................................#######...........
............................o.........................#......................o...
...............................................#....#......................#.....
...@.......................###.....#.##.........#..........###.................#.
#############...####.............................................................
............#+++#..............#+++++++++#............#+++++++#..................
............#+++#..............###########............#########..................
............#####................................................................
";

pub const LAVA_LAKE: &str = "\
..........................................................................
..........................................................................
....................................................o.....................
..................................................#####...................
..............................................o...........................
.........................................#####.......##...................
..........................o..........v............................ooo.....
........................#####.................................#########...
............................................=.............................
...................o...................#########..........................
.................#####....................................................
..............................................................#...........
.....@.......###..........................................................
.#########...............................||...............................
.........#...............##.##.##.........................................
.........#+++++++++++++++++++++++++++++++++++++++++++++++++++++++++++#....
.........#############################################################....
";

/// The campaign, first to last
pub const GAME_LEVELS: &[&str] = &[FIRST_STEPS, SKY_ISLANDS, LAVA_LAKE];
