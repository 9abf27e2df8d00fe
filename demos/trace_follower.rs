//! Drive a follower headlessly and print the frames it would draw.
//!
//! cargo run --example trace_follower -- 0.2
//! RUST_LOG=trace cargo run --example trace_follower

use folio_lib::cursor::{frames_to_settle, PointerEvent, PointerFollower, XY};
use folio_lib::CursorConfig;

/// Stand-in element: just a tag and an optional parent.
#[derive(Debug, Clone)]
struct Node {
    tag: &'static str,
    parent: Option<Box<Node>>,
}

impl folio_lib::cursor::ElementNode for Node {
    fn tag_name(&self) -> String {
        self.tag.to_string()
    }

    fn has_class(&self, _class: &str) -> bool {
        false
    }

    fn attribute(&self, _name: &str) -> Option<String> {
        None
    }

    fn parent_element(&self) -> Option<Self> {
        self.parent.as_deref().cloned()
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let factor = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<f64>().ok())
        .unwrap_or(0.2);

    let config = CursorConfig {
        smoothing_factor: factor,
        ..Default::default()
    };
    let mut follower = match PointerFollower::new(config) {
        Ok(follower) => follower,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        },
    };

    let link_text = Node {
        tag: "span",
        parent: Some(Box::new(Node {
            tag: "a",
            parent: None,
        })),
    };

    let script: Vec<PointerEvent<Node>> = vec![
        PointerEvent::Move(XY::new(320.0, 240.0)),
        PointerEvent::Over(link_text.clone()),
        PointerEvent::Move(XY::new(640.0, 120.0)),
        PointerEvent::Out(link_text),
        PointerEvent::ViewportLeave,
        PointerEvent::ViewportEnter,
        PointerEvent::Move(XY::new(10.0, 10.0)),
    ];

    println!("=== Follower trace (smoothing factor {}) ===\n", factor);

    for event in &script {
        follower.handle_event(event);
        let gap = follower
            .state()
            .current()
            .distance_to(follower.state().target());
        let frames = frames_to_settle(gap, factor, 0.5).unwrap_or(1).max(1);

        println!("{:?} -> {} frame(s)", event, frames);
        for _ in 0..frames {
            let frame = follower.tick();
            println!(
                "  #{:<4} transform: {:<32} opacity: {} hover: {}",
                follower.frames(),
                frame.css_transform(),
                frame.css_opacity(),
                frame.hovering
            );
        }
        println!();
    }
}
