//! Puzzle Tour
//!
//! A quick tour of the stateless puzzle functions that ship alongside the
//! selector builder.
//!
//! Run with: cargo run --example puzzle_tour

use selectra::puzzles::numbers::{digital_root, factorial, fizz_buzz, is_valid_card_number};
use selectra::puzzles::strings::{brackets_balanced, common_directory_path, interval_string};
use selectra::puzzles::{Circle, Point, Rectangle};

fn main() {
    println!("=== Puzzle Tour ===\n");

    for n in [3, 4, 5, 15] {
        println!("fizz_buzz({n}) = {}", fizz_buzz(n));
    }
    println!("factorial(10) = {}", factorial(10));
    println!("digital_root(165536) = {}", digital_root(165_536));
    println!(
        "is_valid_card_number(4012888888881881) = {}",
        is_valid_card_number(4_012_888_888_881_881)
    );

    println!("interval_string(5, 3, true, true) = {}", interval_string(5, 3, true, true));
    println!(
        "brackets_balanced(\"{{[(<{{[]}}>)]}}\") = {}",
        brackets_balanced("{[(<{[]}>)]}")
    );
    println!(
        "common_directory_path = {:?}",
        common_directory_path(&["/web/images/image1.png", "/web/images/image2.png"])
    );

    let rectangle = Rectangle {
        width: 10.0,
        height: 20.0,
    };
    println!("rectangle area = {}", rectangle.area());

    let circle = Circle {
        center: Point { x: 0.0, y: 0.0 },
        radius: 10.0,
    };
    println!(
        "circle contains (5, 5) = {}",
        circle.contains(&Point { x: 5.0, y: 5.0 })
    );

    println!("\n=== Tour Complete ===");
}
