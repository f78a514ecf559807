//! # Item Icons
//!
//! Deterministic icon rendering: a rarity halo followed by a per-type
//! drawing recipe. Recipes are laid out on a 64 pixel grid and scaled to the
//! requested size.

use crate::rendering::canvas::{rgb, Bounds, Canvas};
use crate::{config, Item, ItemType, Rarity};
use image::{Rgba, RgbaImage};

/// Side length the recipe offsets are designed for.
const DESIGN_SIZE: f32 = 64.0;

/// Cork colour of potion bottles, independent of rarity.
pub const CORK_COLOR: Rgba<u8> = rgb(0x8B4513);
/// Gem colour of legendary rings.
pub const LEGENDARY_GEM_COLOR: Rgba<u8> = rgb(0xFF0000);
/// Gem colour of rare rings.
pub const RARE_GEM_COLOR: Rgba<u8> = rgb(0x0000FF);

/// Foreground and glow colours for a rarity tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub fill: Rgba<u8>,
    pub glow: Rgba<u8>,
}

impl Palette {
    /// Gold, silver and bronze for the known tiers; neutral gray otherwise.
    pub fn for_rarity(rarity: Rarity) -> Self {
        let (fill, glow) = match rarity {
            Rarity::Legendary => (0xFFD700, 0xFFF7D6),
            Rarity::Rare => (0xC0C0C0, 0xE8E8E8),
            Rarity::Common => (0xCD853F, 0xE6C5A5),
            Rarity::Unknown => (0x808080, 0xA8A8A8),
        };
        Self {
            fill: rgb(fill),
            glow: rgb(glow),
        }
    }
}

/// Canvas geometry shared by the recipes.
struct Frame {
    w: f32,
    h: f32,
    cx: f32,
    cy: f32,
    scale: f32,
}

impl Frame {
    fn new(width: u32, height: u32) -> Self {
        Self {
            w: width as f32,
            h: height as f32,
            cx: (width / 2) as f32,
            cy: (height / 2) as f32,
            scale: width.min(height) as f32 / DESIGN_SIZE,
        }
    }

    /// Scales a design-grid offset.
    fn u(&self, value: f32) -> f32 {
        value * self.scale
    }

    /// Scales a stroke width, never thinner than one pixel.
    fn stroke(&self, value: f32) -> f32 {
        (value * self.scale).max(1.0)
    }
}

/// Renders item icons.
#[derive(Debug, Clone, Default)]
pub struct VisualGenerator;

impl VisualGenerator {
    /// Creates a new visual generator.
    pub fn new() -> Self {
        Self
    }

    /// Renders an icon at the default 64x64 size.
    pub fn render(&self, item: &Item) -> RgbaImage {
        self.generate(item, config::DEFAULT_ICON_SIZE)
    }

    /// Renders an icon of the requested size.
    ///
    /// The output depends only on the item's type and rarity and on `size`.
    ///
    /// # Examples
    ///
    /// ```
    /// use loot_forge::{Item, ItemType, Rarity, VisualGenerator};
    ///
    /// let staff = Item::new("Mystic Staff", ItemType::Staff, Rarity::Rare);
    /// let icon = VisualGenerator::new().generate(&staff, (40, 40));
    /// assert_eq!(icon.dimensions(), (40, 40));
    /// ```
    pub fn generate(&self, item: &Item, size: (u32, u32)) -> RgbaImage {
        let (width, height) = size;
        let frame = Frame::new(width, height);
        let palette = Palette::for_rarity(item.rarity);
        let mut canvas = Canvas::new(width, height);

        draw_halo(&mut canvas, &frame, item.rarity, palette.glow);

        match item.item_type {
            ItemType::Sword => draw_sword(&mut canvas, &frame, palette),
            ItemType::Shield => draw_shield(&mut canvas, &frame, palette),
            ItemType::Potion => draw_potion(&mut canvas, &frame, palette),
            ItemType::Staff => draw_staff(&mut canvas, &frame, palette),
            ItemType::Scroll => draw_scroll(&mut canvas, &frame, palette),
            ItemType::Bow => draw_bow(&mut canvas, &frame, palette),
            ItemType::Ring => draw_ring(&mut canvas, &frame, palette, item.rarity),
            ItemType::Amulet => draw_amulet(&mut canvas, &frame, palette),
            ItemType::Axe => draw_axe(&mut canvas, &frame, palette),
            ItemType::Wand => draw_wand(&mut canvas, &frame, palette),
            ItemType::Unknown => {}
        }

        canvas.into_image()
    }
}

/// Concentric outlines signalling rarity: three for legendary, one for rare.
fn draw_halo(canvas: &mut Canvas, f: &Frame, rarity: Rarity, glow: Rgba<u8>) {
    let insets: &[f32] = match rarity {
        Rarity::Legendary => &[0.0, 2.0, 4.0],
        Rarity::Rare => &[2.0],
        Rarity::Common | Rarity::Unknown => &[],
    };

    let full = Bounds::new(0.0, 0.0, f.w, f.h);
    for &inset in insets {
        canvas.ellipse_outline(full.inset(f.u(inset)), glow, 1.0);
    }
}

fn draw_sword(canvas: &mut Canvas, f: &Frame, p: Palette) {
    // blade
    canvas.line((f.cx, f.u(8.0)), (f.cx, f.h - f.u(8.0)), p.glow, f.stroke(5.0));
    canvas.line((f.cx, f.u(5.0)), (f.cx, f.h - f.u(5.0)), p.fill, f.stroke(3.0));
    // guard
    canvas.rectangle(
        Bounds::new(f.cx - f.u(15.0), f.cy - f.u(3.0), f.cx + f.u(15.0), f.cy + f.u(3.0)),
        p.fill,
    );
    // handle
    canvas.rectangle(
        Bounds::new(f.cx - f.u(2.0), f.cy + f.u(3.0), f.cx + f.u(2.0), f.h - f.u(10.0)),
        p.fill,
    );
    // pommel
    canvas.ellipse(
        Bounds::new(f.cx - f.u(4.0), f.h - f.u(12.0), f.cx + f.u(4.0), f.h - f.u(4.0)),
        p.fill,
    );
}

fn draw_shield(canvas: &mut Canvas, f: &Frame, p: Palette) {
    let full = Bounds::new(0.0, 0.0, f.w, f.h);
    canvas.arc(full.inset(f.u(5.0)), 0.0, 180.0, p.glow, f.stroke(4.0));
    canvas.arc(full.inset(f.u(8.0)), 0.0, 180.0, p.fill, f.stroke(2.0));
    canvas.line((f.u(8.0), f.cy), (f.w - f.u(8.0), f.cy), p.fill, f.stroke(2.0));
    canvas.line((f.cx, f.u(10.0)), (f.cx, f.cy + f.u(5.0)), p.fill, f.stroke(2.0));
}

fn draw_potion(canvas: &mut Canvas, f: &Frame, p: Palette) {
    canvas.ellipse(
        Bounds::new(f.cx - f.u(12.0), f.h - f.u(35.0), f.cx + f.u(12.0), f.h - f.u(11.0)),
        p.glow,
    );
    canvas.polygon(
        &[
            (f.cx - f.u(8.0), f.cy),
            (f.cx - f.u(12.0), f.h - f.u(15.0)),
            (f.cx + f.u(12.0), f.h - f.u(15.0)),
            (f.cx + f.u(8.0), f.cy),
        ],
        p.fill,
    );
    // neck, then cork
    canvas.rectangle(
        Bounds::new(f.cx - f.u(5.0), f.cy - f.u(12.0), f.cx + f.u(5.0), f.cy),
        p.fill,
    );
    canvas.rectangle(
        Bounds::new(f.cx - f.u(4.0), f.cy - f.u(18.0), f.cx + f.u(4.0), f.cy - f.u(12.0)),
        CORK_COLOR,
    );
}

fn draw_staff(canvas: &mut Canvas, f: &Frame, p: Palette) {
    canvas.line((f.cx, f.u(8.0)), (f.cx, f.h - f.u(8.0)), p.glow, f.stroke(5.0));
    canvas.line((f.cx, f.u(5.0)), (f.cx, f.h - f.u(5.0)), p.fill, f.stroke(3.0));
    // orb
    canvas.ellipse(
        Bounds::new(f.cx - f.u(12.0), f.u(3.0), f.cx + f.u(12.0), f.u(27.0)),
        p.glow,
    );
    canvas.ellipse(
        Bounds::new(f.cx - f.u(10.0), f.u(5.0), f.cx + f.u(10.0), f.u(25.0)),
        p.fill,
    );
}

fn draw_scroll(canvas: &mut Canvas, f: &Frame, p: Palette) {
    canvas.rectangle(
        Bounds::new(f.u(12.0), f.cy - f.u(17.0), f.w - f.u(12.0), f.cy + f.u(17.0)),
        p.glow,
    );
    canvas.rectangle(
        Bounds::new(f.u(15.0), f.cy - f.u(15.0), f.w - f.u(15.0), f.cy + f.u(15.0)),
        p.fill,
    );
    // rolled ends
    canvas.ellipse(
        Bounds::new(f.u(8.0), f.cy - f.u(15.0), f.u(22.0), f.cy + f.u(15.0)),
        p.fill,
    );
    canvas.ellipse(
        Bounds::new(f.w - f.u(22.0), f.cy - f.u(15.0), f.w - f.u(8.0), f.cy + f.u(15.0)),
        p.fill,
    );
}

fn draw_bow(canvas: &mut Canvas, f: &Frame, p: Palette) {
    let full = Bounds::new(0.0, 0.0, f.w, f.h);
    canvas.arc(full.inset(f.u(5.0)), -35.0, 35.0, p.glow, f.stroke(4.0));
    canvas.arc(full.inset(f.u(8.0)), -30.0, 30.0, p.fill, f.stroke(3.0));
    // string, then grip wraps
    canvas.line((f.u(12.0), f.cy), (f.w - f.u(12.0), f.cy), p.fill, f.stroke(2.0));
    for offset in [-5.0, 0.0, 5.0] {
        let y = f.cy + f.u(offset);
        canvas.line((f.cx - f.u(5.0), y), (f.cx + f.u(5.0), y), p.fill, 1.0);
    }
}

fn draw_ring(canvas: &mut Canvas, f: &Frame, p: Palette, rarity: Rarity) {
    let padding = (f.w / 4.0).floor();
    canvas.ellipse(
        Bounds::new(
            padding - f.u(2.0),
            padding - f.u(2.0),
            f.w - padding + f.u(2.0),
            f.h - padding + f.u(2.0),
        ),
        p.glow,
    );
    canvas.ellipse_outline(
        Bounds::new(padding, padding, f.w - padding, f.h - padding),
        p.fill,
        f.stroke(3.0),
    );

    let gem = match rarity {
        Rarity::Legendary => Some(LEGENDARY_GEM_COLOR),
        Rarity::Rare => Some(RARE_GEM_COLOR),
        Rarity::Common | Rarity::Unknown => None,
    };
    if let Some(color) = gem {
        canvas.ellipse(
            Bounds::new(f.cx - f.u(4.0), padding - f.u(2.0), f.cx + f.u(4.0), padding + f.u(6.0)),
            color,
        );
    }
}

fn draw_amulet(canvas: &mut Canvas, f: &Frame, p: Palette) {
    // chain
    canvas.line((f.cx, f.u(12.0)), (f.cx, f.h - f.u(15.0)), p.glow, f.stroke(4.0));
    canvas.line((f.cx, f.u(10.0)), (f.cx, f.h - f.u(15.0)), p.fill, f.stroke(2.0));
    // pendant
    canvas.ellipse(
        Bounds::new(f.cx - f.u(17.0), f.h - f.u(32.0), f.cx + f.u(17.0), f.h - f.u(3.0)),
        p.glow,
    );
    canvas.ellipse(
        Bounds::new(f.cx - f.u(15.0), f.h - f.u(30.0), f.cx + f.u(15.0), f.h - f.u(5.0)),
        p.fill,
    );
}

fn draw_axe(canvas: &mut Canvas, f: &Frame, p: Palette) {
    canvas.line((f.cx, f.u(8.0)), (f.cx, f.h - f.u(8.0)), p.glow, f.stroke(4.0));
    canvas.line((f.cx, f.u(5.0)), (f.cx, f.h - f.u(5.0)), p.fill, f.stroke(2.0));

    let blade = [
        (f.cx, f.u(15.0)),
        (f.cx - f.u(15.0), f.u(5.0)),
        (f.cx - f.u(15.0), f.u(25.0)),
        (f.cx, f.u(35.0)),
    ];
    let shadow = blade.map(|(x, y)| (x - f.u(2.0), y - f.u(2.0)));
    canvas.polygon(&shadow, p.glow);
    canvas.polygon(&blade, p.fill);
}

fn draw_wand(canvas: &mut Canvas, f: &Frame, p: Palette) {
    canvas.line(
        (f.u(18.0), f.h - f.u(13.0)),
        (f.w - f.u(18.0), f.u(13.0)),
        p.glow,
        f.stroke(4.0),
    );
    canvas.line(
        (f.u(15.0), f.h - f.u(10.0)),
        (f.w - f.u(15.0), f.u(10.0)),
        p.fill,
        f.stroke(2.0),
    );
    // tip
    canvas.ellipse(
        Bounds::new(f.w - f.u(27.0), f.u(3.0), f.w - f.u(13.0), f.u(17.0)),
        p.glow,
    );
    canvas.ellipse(
        Bounds::new(f.w - f.u(25.0), f.u(5.0), f.w - f.u(15.0), f.u(15.0)),
        p.fill,
    );
}
