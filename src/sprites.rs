#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TextureId {
    TenochanLeft,
    TenochanRight,
    FishLeft,
    FishRight,
}

impl TextureId {
    pub const ALL: [TextureId; 4] = [
        TextureId::TenochanLeft,
        TextureId::TenochanRight,
        TextureId::FishLeft,
        TextureId::FishRight,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            TextureId::TenochanLeft => "tenochan left.png",
            TextureId::TenochanRight => "tenochan side.png",
            TextureId::FishLeft => "fish.png",
            TextureId::FishRight => "fish right.png",
        }
    }
}

/// Punto de referencia dentro del sprite, en fracciones de su tamaño.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Anchor {
    pub x: f32,
    pub y: f32,
}

impl Anchor {
    pub const CENTER: Anchor = Anchor { x: 0.5, y: 0.5 };
}

/// Caja alineada a los ejes, esquina superior izquierda + tamaño.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub texture: TextureId,
    pub visible: bool,
    pub anchor: Anchor,
}

impl Sprite {
    pub fn new(x: f32, y: f32, size: f32, texture: TextureId) -> Self {
        Self {
            x,
            y,
            width: size,
            height: size,
            texture,
            visible: true,
            anchor: Anchor::CENTER,
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            x: self.x - self.width * self.anchor.x,
            y: self.y - self.height * self.anchor.y,
            width: self.width,
            height: self.height,
        }
    }

    pub fn set_size(&mut self, size: f32) {
        self.width = size;
        self.height = size;
    }

    pub fn grow(&mut self, amount: f32) {
        self.width += amount;
        self.height += amount;
    }
}
