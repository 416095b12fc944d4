use crate::sprites::Sprite;
use crate::textures::Texture;

pub fn fill(frame: &mut [u8], color: [u8; 4]) {
    for px in frame.chunks_exact_mut(4) {
        px.copy_from_slice(&color);
    }
}

// Escala por vecino más cercano, recortado al lienzo y con mezcla alfa
pub fn draw_sprite(frame: &mut [u8], w: i32, h: i32, sprite: &Sprite, texture: &Texture) {
    if !sprite.visible || sprite.width <= 0.0 || sprite.height <= 0.0 {
        return;
    }
    let b = sprite.bounds();

    let x0 = (b.x.floor() as i32).max(0);
    let y0 = (b.y.floor() as i32).max(0);
    let x1 = (b.right().ceil() as i32).min(w);
    let y1 = (b.bottom().ceil() as i32).min(h);

    for yy in y0..y1 {
        // Centro del píxel en coordenadas del sprite
        let v = (yy as f32 + 0.5 - b.y) / b.height;
        if !(0.0..1.0).contains(&v) {
            continue;
        }
        let ty = ((v * texture.height as f32) as u32).min(texture.height - 1);
        for xx in x0..x1 {
            let u = (xx as f32 + 0.5 - b.x) / b.width;
            if !(0.0..1.0).contains(&u) {
                continue;
            }
            let tx = ((u * texture.width as f32) as u32).min(texture.width - 1);
            let src = texture.pixel(tx, ty);
            let idx = ((yy * w + xx) * 4) as usize;
            blend(&mut frame[idx..idx + 4], src);
        }
    }
}

fn blend(dst: &mut [u8], src: [u8; 4]) {
    match src[3] {
        0 => {}
        255 => dst.copy_from_slice(&src),
        a => {
            let a = a as u32;
            for i in 0..3 {
                dst[i] = ((src[i] as u32 * a + dst[i] as u32 * (255 - a)) / 255) as u8;
            }
            dst[3] = 255;
        }
    }
}
