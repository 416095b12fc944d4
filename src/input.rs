use winit::event::VirtualKeyCode;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Arrow {
    Left,
    Right,
    Up,
    Down,
}

pub fn arrow_from_keycode(key: VirtualKeyCode) -> Option<Arrow> {
    match key {
        VirtualKeyCode::Left => Some(Arrow::Left),
        VirtualKeyCode::Right => Some(Arrow::Right),
        VirtualKeyCode::Up => Some(Arrow::Up),
        VirtualKeyCode::Down => Some(Arrow::Down),
        _ => None,
    }
}
