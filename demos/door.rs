//! Door-opening demo: a fallback under a sequence, with sibling peels.
//!
//! The tree ticks with `(Agent, Door)`. Condition/action leaves only care
//! about one of the two, so each sits under a peel projecting its view.
//!
//! ```bash
//! cargo run --example door
//! ```

use tinybt::{Node, Status, Tree, builder};

struct Door {
    open: bool,
    locked: bool,
}

struct Agent {
    has_key: bool,
}

type World = (Agent, Door);

struct IsDoorOpen;
impl Node<(Door,)> for IsDoorOpen {
    fn tick(&self, (door,): (&mut Door,)) -> Status {
        println!("The door is {}.", if door.open { "open" } else { "closed" });
        if door.open {
            Status::Success
        } else {
            Status::Failure
        }
    }
}

struct OpenDoor;
impl Node<(Door,)> for OpenDoor {
    fn tick(&self, (door,): (&mut Door,)) -> Status {
        if door.locked {
            println!("The door won't open, it's locked.");
            Status::Failure
        } else {
            door.open = true;
            println!("Door opened!");
            Status::Success
        }
    }
}

struct HaveKey;
impl Node<(Agent,)> for HaveKey {
    fn tick(&self, (agent,): (&mut Agent,)) -> Status {
        if agent.has_key {
            Status::Success
        } else {
            Status::Failure
        }
    }
}

struct UnlockDoor;
impl Node<(Door,)> for UnlockDoor {
    fn tick(&self, (door,): (&mut Door,)) -> Status {
        door.locked = false;
        println!("Door unlocked!");
        Status::Success
    }
}

struct SmashDoor;
impl Node<(Door,)> for SmashDoor {
    fn tick(&self, (_door,): (&mut Door,)) -> Status {
        println!("You smashed the door, but it didn't move a bit.");
        Status::Failure
    }
}

struct EnterRoom;
impl Node<World> for EnterRoom {
    fn tick(&self, (_agent, _door): (&mut Agent, &mut Door)) -> Status {
        println!("You entered the room. Congrats!");
        Status::Success
    }
}

fn peel_agent<'a>(args: (&'a mut Agent, &'a mut Door)) -> (&'a mut Agent,) {
    (args.0,)
}

fn peel_door<'a>(args: (&'a mut Agent, &'a mut Door)) -> (&'a mut Door,) {
    (args.1,)
}

fn door_tree() -> Tree<World> {
    let try_unlock = builder::sequence::<World>(vec![
        builder::peel::<World, (Agent,), _>(peel_agent, Box::new(HaveKey)),
        builder::peel::<World, (Door,), _>(peel_door, Box::new(UnlockDoor)),
        builder::peel::<World, (Door,), _>(peel_door, Box::new(OpenDoor)),
    ]);

    let try_open = builder::fallback::<World>(vec![
        builder::peel::<World, (Door,), _>(peel_door, Box::new(IsDoorOpen)),
        builder::peel::<World, (Door,), _>(peel_door, Box::new(OpenDoor)),
        try_unlock,
        builder::peel::<World, (Door,), _>(peel_door, Box::new(SmashDoor)),
    ]);

    let mut tree = Tree::new();
    tree.set_root(builder::sequence::<World>(vec![
        try_open,
        Box::new(EnterRoom),
    ]));
    tree
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let tree = door_tree();

    println!("\n# The door is already open...");
    tree.tick_root((&mut Agent { has_key: false }, &mut Door { open: true, locked: false }));

    println!("\n# The door is closed but unlocked...");
    tree.tick_root((&mut Agent { has_key: false }, &mut Door { open: false, locked: false }));

    println!("\n# The door is locked and we have no key...");
    tree.tick_root((&mut Agent { has_key: false }, &mut Door { open: false, locked: true }));

    println!("\n# The door is locked and we got the key...");
    tree.tick_root((&mut Agent { has_key: true }, &mut Door { open: false, locked: true }));
}
