use std::fmt::{self, Display, Formatter};

use counted_set::collections::CountedSet;
use counted_set::collections::Multiset;
use log::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Arrow {
    Iron,
    Wooden,
    Elven,
    Dwarvish,
    Magic,
    Silver,
}

impl Display for Arrow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Arrow::Iron => "iron",
            Arrow::Wooden => "wooden",
            Arrow::Elven => "elven",
            Arrow::Dwarvish => "dwarvish",
            Arrow::Magic => "magic",
            Arrow::Silver => "silver",
        };
        write!(f, "{name}")
    }
}

fn main() {
    env_logger::init();

    println!("\n[Empty Quiver]\n");

    let empty = CountedSet::<Arrow>::new();
    println!("{empty}");
    println!("iron: {}", empty.count(&Arrow::Iron));

    println!("\n[Full Quiver]\n");

    let mut quiver = CountedSet::<Arrow>::from([
        Arrow::Iron,
        Arrow::Magic,
        Arrow::Iron,
        Arrow::Silver,
        Arrow::Iron,
        Arrow::Iron,
    ]);
    info!("filled quiver with {} arrows of {} kinds", quiver.total_count(), quiver.unique_count());
    println!("{quiver}");
    println!("iron: {}", quiver.count(&Arrow::Iron));

    quiver.remove(&Arrow::Iron);
    quiver.remove(&Arrow::Dwarvish);
    quiver.remove(&Arrow::Magic);
    println!("{quiver}");
    println!("{quiver:?}");

    println!("\n[Restocking]\n");

    let restock = CountedSet::<Arrow>::from([Arrow::Wooden, Arrow::Wooden, Arrow::Elven]);
    let stocked = &quiver + &restock;
    println!("{stocked}");
    println!("original still holds everything: {}", quiver.is_submultiset(&stocked));

    if let Err(error) = quiver.remove_many(&Arrow::Silver, 2) {
        warn!("{error}");
    }
    for arrow in stocked.elements() {
        print!("{arrow} ");
    }
    println!();
}
