use koch::{KochSnowflake, Point, Polyline, SnowflakeConfig, subdivide};

fn main() {
    // Order-1 snowflake on a 300-wide triangle: the six-pointed star
    let generator = KochSnowflake::new(SnowflakeConfig::new(1, 300.0)).unwrap();
    let flake = generator.generate();

    for (i, p) in flake.iter().enumerate() {
        println!("{:>3}: ({:>9.3}, {:>9.3})", i, p.x, p.y);
    }
    println!(
        "points = {}, perimeter = {:.3}, area = {:.3}",
        flake.len(),
        flake.perimeter(),
        flake.signed_area()
    );

    // A single Koch curve and how its length grows with the order
    for order in 0..=4 {
        let curve = subdivide(Point::new(0.0, 0.0), Point::new(3.0, 0.0), order).unwrap();
        println!("order {}: {:>4} points, length {:.4}", order, curve.len(), curve.length());
    }
}
