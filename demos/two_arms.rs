//! Minimal projection demo: one body, two arms.
//!
//! The root sequence ticks with the whole `Body`, while each child peels off
//! a single `Arm` for its subtree.
//!
//! ```bash
//! cargo run --example two_arms
//! ```
//!
//! Expected output:
//!
//! ```text
//! left arm
//! right arm
//! ```

use tinybt::{Node, Status, Tree, builder};

struct Arm {
    name: &'static str,
}

struct Body {
    left_arm: Arm,
    right_arm: Arm,
}

struct PrintArm;
impl Node<(Arm,)> for PrintArm {
    fn tick(&self, (arm,): (&mut Arm,)) -> Status {
        println!("{}", arm.name);
        Status::Success
    }
}

fn peel_left_arm<'a>(args: (&'a mut Body,)) -> (&'a mut Arm,) {
    (&mut args.0.left_arm,)
}

fn peel_right_arm<'a>(args: (&'a mut Body,)) -> (&'a mut Arm,) {
    (&mut args.0.right_arm,)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut tree = Tree::new();
    tree.set_root(builder::sequence::<(Body,)>(vec![
        builder::peel::<(Body,), (Arm,), _>(peel_left_arm, Box::new(PrintArm)),
        builder::peel::<(Body,), (Arm,), _>(peel_right_arm, Box::new(PrintArm)),
    ]));

    let mut body = Body {
        left_arm: Arm { name: "left arm" },
        right_arm: Arm { name: "right arm" },
    };
    tree.tick_root((&mut body,));
}
