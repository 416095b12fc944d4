use crate::sprites::TextureId;
use anyhow::{bail, Context};
use png::{ColorType, Decoder, Transformations};
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

const PLACEHOLDER_SIZE: u32 = 16;

/// Imagen RGBA de 8 bits por canal.
#[derive(Clone, Debug)]
pub struct Texture {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<[u8; 4]>,
}

impl Texture {
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.pixels[(y * self.width + x) as usize]
    }

    pub fn load_png(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
        let mut decoder = Decoder::new(file);
        decoder
            .set_transformations(Transformations::normalize_to_color8() | Transformations::ALPHA);

        let mut reader = decoder
            .read_info()
            .with_context(|| format!("reading PNG header of {}", path.display()))?;
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader
            .next_frame(&mut buf)
            .with_context(|| format!("decoding {}", path.display()))?;
        let data = &buf[..info.buffer_size()];

        let pixels = match info.color_type {
            ColorType::Rgba => data
                .chunks_exact(4)
                .map(|p| [p[0], p[1], p[2], p[3]])
                .collect(),
            ColorType::GrayscaleAlpha => data
                .chunks_exact(2)
                .map(|p| [p[0], p[0], p[0], p[1]])
                .collect(),
            other => bail!("unsupported PNG color type {:?} in {}", other, path.display()),
        };

        Ok(Self {
            width: info.width,
            height: info.height,
            pixels,
        })
    }

    // Dibujo simple para cuando falta el PNG
    pub fn placeholder(id: TextureId) -> Self {
        let n = PLACEHOLDER_SIZE;
        let mut pixels = vec![[0, 0, 0, 0]; (n * n) as usize];
        let facing_right = matches!(id, TextureId::TenochanRight | TextureId::FishRight);

        for y in 0..n {
            for x in 0..n {
                // Coordenadas vistas como si mirara a la derecha
                let fx = if facing_right { x } else { n - 1 - x };
                let color = match id {
                    TextureId::TenochanLeft | TextureId::TenochanRight => tenochan_pixel(fx, y),
                    TextureId::FishLeft | TextureId::FishRight => fish_pixel(fx, y),
                };
                if let Some(c) = color {
                    pixels[(y * n + x) as usize] = c;
                }
            }
        }

        Self {
            width: n,
            height: n,
            pixels,
        }
    }
}

fn tenochan_pixel(x: u32, y: u32) -> Option<[u8; 4]> {
    let dx = x as f32 - 7.5;
    let dy = y as f32 - 7.5;
    if (x, y) == (11, 6) {
        return Some([30, 20, 40, 255]);
    }
    if dx * dx + dy * dy <= 7.5 * 7.5 {
        return Some([250, 190, 200, 255]);
    }
    None
}

fn fish_pixel(x: u32, y: u32) -> Option<[u8; 4]> {
    let xi = x as i32;
    let yi = y as i32;
    if (x, y) == (11, 6) {
        return Some([20, 20, 20, 255]);
    }
    // Cuerpo elíptico
    let dx = (x as f32 - 9.0) / 6.0;
    let dy = (y as f32 - 7.5) / 4.0;
    if dx * dx + dy * dy <= 1.0 {
        return Some([250, 140, 40, 255]);
    }
    // Cola
    if xi <= 3 && (yi - 7).abs() <= 3 - xi + 1 {
        return Some([230, 100, 30, 255]);
    }
    None
}

pub struct Textures {
    textures: HashMap<TextureId, Texture>,
}

impl Textures {
    /// Carga las cuatro texturas desde `dir`; las que falten se sustituyen por un dibujo.
    pub fn load(dir: &Path) -> Self {
        let textures = TextureId::ALL
            .iter()
            .map(|&id| {
                let path = dir.join(id.file_name());
                let texture = Texture::load_png(&path).unwrap_or_else(|err| {
                    log::warn!("using placeholder for {:?}: {:#}", id, err);
                    Texture::placeholder(id)
                });
                (id, texture)
            })
            .collect();
        Self { textures }
    }

    #[cfg(test)]
    pub fn placeholders() -> Self {
        let textures = TextureId::ALL
            .iter()
            .map(|&id| (id, Texture::placeholder(id)))
            .collect();
        Self { textures }
    }

    pub fn get(&self, id: TextureId) -> &Texture {
        &self.textures[&id]
    }
}
