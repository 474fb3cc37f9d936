//! Example: Building a wireframe through the editor API
//!
//! This example drives the editor the way a browser adapter would: toolbar
//! drops, a properties-panel edit, a drag and a wheel zoom. It then prints
//! the scene document and writes the SVG export to `wireframe.svg`.

use std::fs;

use drafter::{
    Editor,
    config::AppConfig,
    element::{ElementKind, ElementPatch},
    geometry::Point,
    interaction::PointerButton,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut editor = Editor::new(&AppConfig::default())?;

    // Toolbar drops at canvas-local positions
    let navbar = editor.drop_at("navbar", Point::new(400.0, 40.0));
    let card = editor.drop_at("card", Point::new(250.0, 200.0));
    editor.drop_at("button", Point::new(250.0, 320.0));

    // Properties panel edits on the selected element
    editor.select(&navbar);
    editor.update_selected(&ElementPatch::new().with_text("Acme").with_width(700.0));

    editor.select(&card);
    editor.update_selected(&ElementPatch::new().with_text("Revenue").with_height(120.0));

    // Drag the card 100px to the right, then zoom in around it
    editor.pointer_down(Point::new(250.0, 200.0), PointerButton::Primary);
    editor.pointer_move(Point::new(350.0, 200.0));
    editor.pointer_up();
    editor.wheel(Point::new(350.0, 200.0), -120.0);

    editor.create_at_center(ElementKind::Arrow);

    println!("{}", editor.export_json()?);

    fs::write("wireframe.svg", editor.export_svg()?)?;
    println!("Wrote wireframe.svg");

    Ok(())
}
