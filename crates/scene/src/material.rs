//! Resolved fixture colors and materials

use bevy::color::palettes::css;
use bevy::prelude::*;

use crate::fixture::MaterialProps;

/// Convert a CSS color string (`#rgb`, `#rrggbb` or a named color), `None`
/// if it does not parse
pub fn css_color(value: &str) -> Option<Color> {
    let value = value.trim();
    if value.starts_with('#') {
        return Srgba::hex(value).ok().map(Color::from);
    }
    named_color(&value.to_ascii_lowercase()).map(Color::from)
}

fn named_color(name: &str) -> Option<Srgba> {
    let color = match name {
        "aqua" | "cyan" => css::AQUA,
        "beige" => css::BEIGE,
        "black" => css::BLACK,
        "blue" => css::BLUE,
        "brown" => css::BROWN,
        "coral" => css::CORAL,
        "darkgray" | "darkgrey" => css::DARK_GRAY,
        "darkgreen" => css::DARK_GREEN,
        "darkslategray" | "darkslategrey" => css::DARK_SLATE_GRAY,
        "dimgray" | "dimgrey" => css::DIM_GRAY,
        "forestgreen" => css::FOREST_GREEN,
        "fuchsia" | "magenta" => css::FUCHSIA,
        "gold" => css::GOLD,
        "gray" | "grey" => css::GRAY,
        "green" => css::GREEN,
        "hotpink" => css::HOT_PINK,
        "ivory" => css::IVORY,
        "khaki" => css::KHAKI,
        "lightblue" => css::LIGHT_BLUE,
        "lightgray" | "lightgrey" => css::LIGHT_GRAY,
        "lightgreen" => css::LIGHT_GREEN,
        "lime" => css::LIME,
        "maroon" => css::MAROON,
        "navy" => css::NAVY,
        "olive" => css::OLIVE,
        "orange" => css::ORANGE,
        "pink" => css::PINK,
        "purple" => css::PURPLE,
        "red" => css::RED,
        "royalblue" => css::ROYAL_BLUE,
        "saddlebrown" => css::SADDLE_BROWN,
        "salmon" => css::SALMON,
        "seagreen" => css::SEA_GREEN,
        "silver" => css::SILVER,
        "skyblue" => css::SKY_BLUE,
        "steelblue" => css::STEEL_BLUE,
        "tan" => css::TAN,
        "teal" => css::TEAL,
        "tomato" => css::TOMATO,
        "white" => css::WHITE,
        "whitesmoke" => css::WHITE_SMOKE,
        "yellow" => css::YELLOW,
        _ => return None,
    };
    Some(color)
}

/// Base color for a fixture: parsed color (white when unparseable) with the
/// fixture's opacity
pub fn base_color(value: &str, props: &MaterialProps) -> Color {
    let mut color = css_color(value).unwrap_or(Color::WHITE).to_srgba();
    color.alpha = props.opacity.unwrap_or(1.0);
    Color::from(color)
}

/// Standard material for a fixture
pub fn fixture_material(value: &str, props: &MaterialProps) -> StandardMaterial {
    let mut material = StandardMaterial {
        base_color: base_color(value, props),
        metallic: props.metalness,
        perceptual_roughness: props.roughness,
        ..default()
    };
    apply_props(&mut material, props);
    material
}

/// Update an existing material in place
pub fn update_material(material: &mut StandardMaterial, value: &str, props: &MaterialProps) {
    material.base_color = base_color(value, props);
    material.metallic = props.metalness;
    material.perceptual_roughness = props.roughness;
    apply_props(material, props);
}

fn apply_props(material: &mut StandardMaterial, props: &MaterialProps) {
    material.alpha_mode = if props.opacity.is_some() {
        AlphaMode::Blend
    } else {
        AlphaMode::Opaque
    };
    // Line meshes carry no meaningful normals
    material.unlit = props.wireframe;
}
