use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{KochError, Result};
use crate::point::Point;
use crate::snowflake::{Snowflake, base_triangle, check_triangle};
use crate::utils::{MAX_ORDER, validate_order, validate_size};

// Parameters of a snowflake. `max_order` lets an application cap the
// order lower than MAX_ORDER to bound memory use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnowflakeConfig {
    pub order: u32,
    pub size: f64,
    pub max_order: u32,
}

impl Default for SnowflakeConfig {
    fn default() -> Self {
        Self {
            order: 3,
            size: 300.0,
            max_order: MAX_ORDER,
        }
    }
}

impl SnowflakeConfig {
    pub fn new(order: u32, size: f64) -> Self {
        Self {
            order,
            size,
            ..Self::default()
        }
    }

    pub fn with_max_order(mut self, max_order: u32) -> Self {
        self.max_order = max_order;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_order > MAX_ORDER {
            return Err(KochError::invalid(
                "max_order",
                format!("must not exceed {MAX_ORDER}, got {}", self.max_order),
            ));
        }
        if self.order > self.max_order {
            return Err(KochError::NumericOverflow {
                order: self.order,
                max: self.max_order,
            });
        }
        validate_size(self.size)?;
        Ok(())
    }
}

// Snowflake generator with its parameters checked up front,
// so `generate` itself cannot fail.
#[derive(Debug, Clone)]
pub struct KochSnowflake {
    config: SnowflakeConfig,
    vertices: [Point; 3],
}

impl KochSnowflake {
    pub fn new(config: SnowflakeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            vertices: base_triangle(config.size),
        })
    }

    // Generator on a caller-supplied counter-clockwise triangle.
    // `config.size` is ignored.
    pub fn with_triangle(vertices: [Point; 3], order: u32, max_order: u32) -> Result<Self> {
        let config = SnowflakeConfig::new(order, 1.0).with_max_order(max_order);
        config.validate()?;
        check_triangle(&vertices)?;
        Ok(Self { config, vertices })
    }

    pub fn config(&self) -> &SnowflakeConfig {
        &self.config
    }

    pub fn vertices(&self) -> [Point; 3] {
        self.vertices
    }

    pub fn generate(&self) -> Snowflake {
        Snowflake::build(self.vertices, self.config.order)
    }
}

// Snowflakes for several orders of the same size, computed in parallel.
// Every order is checked before any work starts; results keep the
// order of `orders`.
pub fn assemble_orders(orders: &[i32], size: f64) -> Result<Vec<(u32, Snowflake)>> {
    assemble_orders_with_max(orders, size, MAX_ORDER)
}

// Same as `assemble_orders` with a caller-chosen cap, at most MAX_ORDER.
pub fn assemble_orders_with_max(
    orders: &[i32],
    size: f64,
    max_order: u32,
) -> Result<Vec<(u32, Snowflake)>> {
    if max_order > MAX_ORDER {
        return Err(KochError::invalid(
            "max_order",
            format!("must not exceed {MAX_ORDER}, got {max_order}"),
        ));
    }
    let size = validate_size(size)?;
    let orders = orders
        .iter()
        .map(|&order| validate_order(order, max_order))
        .collect::<Result<Vec<u32>>>()?;
    let vertices = base_triangle(size);

    Ok(orders
        .into_par_iter()
        .map(|order| (order, Snowflake::build(vertices, order)))
        .collect())
}
