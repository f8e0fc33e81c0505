// koch holds the Koch snowflake geometry: points, curve subdivision,
// snowflake assembly and the validated generator built on top of them.
pub mod curve;
pub mod error;
pub mod generator;
pub mod point;
pub mod polyline;
pub mod snowflake;
pub mod utils;

pub use curve::{Curve, subdivide};
pub use error::{KochError, Result};
pub use generator::{KochSnowflake, SnowflakeConfig, assemble_orders, assemble_orders_with_max};
pub use point::Point;
pub use polyline::{Bounds, Polyline};
pub use snowflake::{Snowflake, Winding, assemble, assemble_from_triangle, base_triangle};
pub use utils::{MAX_ORDER, curve_point_count, point_count};
