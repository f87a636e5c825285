use canvas::doc::TextAlign;
use cards::ItemKind;

use super::*;

#[test]
fn image_style_has_geometry_only() {
    let mut el = Element::new_image("data:image/png;base64,AAAA");
    el.x = 25.0;
    el.y = 75.0;
    el.rotation = 15.0;
    assert_eq!(
        element_style(&el),
        "left: 25%; top: 75%; width: 200px; transform: translate(-50%, -50%) rotate(15deg);"
    );
}

#[test]
fn text_style_carries_font() {
    let mut el = Element::new_text();
    el.font_size = Some(32.0);
    el.color = Some("#ff0000".to_owned());
    el.text_align = Some(TextAlign::Center);
    let style = element_style(&el);
    assert!(style.contains("font-size: 32px;"), "{style}");
    assert!(style.contains("color: #ff0000;"), "{style}");
    assert!(style.contains("text-align: center;"), "{style}");
}

#[test]
fn placement_style_uses_placement_width() {
    let placement = Placement {
        kind: ItemKind::Message,
        id: 1,
        x: 10.0,
        y: 20.5,
        width: 300.0,
        rotation: -5.0,
        owned: true,
    };
    assert_eq!(
        placement_style(&placement),
        "left: 10%; top: 20.5%; width: 300px; transform: translate(-50%, -50%) rotate(-5deg);"
    );
}
