//! Loads `demos/scene.json` end to end: decode, build the canvas, lay out.

use std::fs;

use ooc::error::{Axis, LayoutError};
use ooc::geom::{PxRect, PxSize};
use ooc::scene::Scene;

#[test]
fn demo_scene_resolves() {
    let text = fs::read_to_string("demos/scene.json").unwrap();
    let canvas = Scene::from_json(&text).unwrap().into_canvas(PxSize::new(300, 150));
    assert_eq!(canvas.size(), PxSize::new(800, 600));

    let layout = canvas.layout().unwrap();
    assert_eq!(layout.frame, PxRect::new(0, 0, 800, 600));

    let frames: Vec<_> = layout.items.iter().map(|i| (i.id.as_str(), i.frame)).collect();
    assert_eq!(
        frames,
        [
            ("logo", Ok(PxRect::new(72, 36, 72, 72))),
            ("banner", Ok(PxRect::new(0, 540, 800, 60))),
            ("panel", Ok(PxRect::new(40, 150, 400, 75))),
            ("broken", Err(LayoutError::Unresolved(Axis::X))),
        ]
    );
}
