//! Shapes stored in unions over a trait-object base.
//!
//! Run with `cargo run --example shapes --features tracing` to see the
//! conversion events emitted by the crate.

use anyof::{OptionalUnion, Union, alternatives, impl_upcast};
use tracing::Level;

trait Shape {
    fn name(&self) -> &'static str;
    fn area(&self) -> f64;
}

#[derive(Clone, Default)]
struct Circle {
    radius: f64,
}

#[derive(Clone)]
struct Square {
    side: f64,
}

#[derive(Clone)]
struct Triangle {
    base: f64,
    height: f64,
}

impl Shape for Circle {
    fn name(&self) -> &'static str {
        "circle"
    }

    fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }
}

impl Shape for Square {
    fn name(&self) -> &'static str {
        "square"
    }

    fn area(&self) -> f64 {
        self.side * self.side
    }
}

impl Shape for Triangle {
    fn name(&self) -> &'static str {
        "triangle"
    }

    fn area(&self) -> f64 {
        self.base * self.height / 2.0
    }
}

impl_upcast!(dyn Shape: Circle, Square, Triangle);

/// Shapes that a round cutter can produce.
type RoundCut = Union<dyn Shape, alternatives![Circle, Square]>;
/// Shapes that a straight cutter can produce.
type StraightCut = Union<dyn Shape, alternatives![Square, Triangle]>;
/// A bin that only accepts round cuts, and may stay empty.
type RoundBin = OptionalUnion<dyn Shape, alternatives![Circle, Square]>;

fn describe(shape: &dyn Shape) -> String {
    format!("{} with an area of {:.2}", shape.name(), shape.area())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut round = RoundCut::default();
    println!("default round cut: {}", describe(&*round));

    round.emplace::<Circle, _>(Circle { radius: 1.5 });
    println!("after emplace: {}", describe(&*round));

    let cuts = [
        StraightCut::new(Square { side: 2.0 }),
        StraightCut::new(Triangle {
            base: 3.0,
            height: 4.0,
        }),
    ];

    for cut in &cuts {
        println!("straight cut: {}", describe(cut.as_base()));

        match RoundCut::try_from_container_ref(cut) {
            Ok(converted) => println!("  accepted as round cut #{}", converted.index()),
            Err(error) => println!("  refused: {error}"),
        }

        let mut bin = RoundBin::empty();
        bin.try_assign_ref(cut)?;
        match bin.as_base() {
            Some(shape) => println!("  binned: {}", describe(shape)),
            None => println!("  the bin stayed empty"),
        }
    }

    Ok(())
}
