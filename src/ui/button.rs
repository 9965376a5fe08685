use macroquad::prelude::*;

/// What a footer button asks the game to do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiAction {
    NewGame,
    Hint,
}

/// Button UI component with hover and click detection
#[derive(Clone)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    text: String,
    action: UiAction,
    color: Color,
    hover_color: Color,
}

impl Button {
    pub fn new(
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        text: impl Into<String>,
        action: UiAction,
    ) -> Self {
        Self {
            x,
            y,
            width,
            height,
            text: text.into(),
            action,
            color: Color::from_rgba(20, 24, 48, 255),
            hover_color: Color::from_rgba(40, 52, 110, 255),
        }
    }

    pub fn action(&self) -> UiAction {
        self.action
    }

    /// Check if a point lies on the button
    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + self.height
    }

    /// Draw button with a neon outline that brightens on hover
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let hovered = self.is_hovered(mouse_pos);
        let (fill, outline) = if hovered {
            (self.hover_color, Color::from_rgba(74, 211, 255, 255))
        } else {
            (self.color, Color::from_rgba(40, 120, 160, 255))
        };

        draw_rectangle(self.x, self.y, self.width, self.height, fill);
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, outline);

        let text_size = measure_text(&self.text, None, 22, 1.0);
        draw_text(
            &self.text,
            self.x + (self.width - text_size.width) / 2.0,
            self.y + (self.height + text_size.height) / 2.0,
            22.0,
            WHITE,
        );
    }

    /// Check if button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_bounds_inclusive() {
        let button = Button::new(10.0, 20.0, 100.0, 40.0, "Hint", UiAction::Hint);
        assert!(button.is_hovered((10.0, 20.0)));
        assert!(button.is_hovered((110.0, 60.0)));
        assert!(button.is_hovered((50.0, 30.0)));
        assert!(!button.is_hovered((9.9, 30.0)));
        assert!(!button.is_hovered((50.0, 60.1)));
        assert_eq!(button.action(), UiAction::Hint);
    }
}
