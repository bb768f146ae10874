//! Outlined single-line text field with a floating label.

use std::borrow::Cow;
use std::sync::Arc;

use eframe::egui::{
    self, Align, Align2, Galley, Id, Image, Layout, Margin, Response, RichText, Stroke, TextBuffer,
    TextEdit, Ui, Vec2, ViewportCommand, pos2, text::LayoutJob, vec2, viewport::IMEPurpose,
};

use crate::assets::Icon;
use crate::ui::theme::AppTheme;

/// Glyph drawn in place of every character of a masked field.
pub const MASK_CHAR: char = '\u{2022}';

/// On-screen keyboard hint. Never used for validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyboardType {
    #[default]
    Text,
    Email,
    Password,
}

impl KeyboardType {
    fn ime_purpose(self) -> IMEPurpose {
        match self {
            Self::Password => IMEPurpose::Password,
            Self::Text | Self::Email => IMEPurpose::Normal,
        }
    }
}

/// Display-only transform. The stored value is never rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisualTransformation {
    #[default]
    None,
    Password,
}

impl VisualTransformation {
    pub fn apply(self, text: &str) -> Cow<'_, str> {
        match self {
            Self::None => Cow::Borrowed(text),
            Self::Password => Cow::Owned(std::iter::repeat_n(MASK_CHAR, text.chars().count()).collect()),
        }
    }

    fn masks(self) -> bool {
        self == Self::Password
    }
}

/// Where the label is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelPlacement {
    /// Inside the field, as placeholder text.
    Placeholder,
    /// Shrunk onto the top border.
    Floating,
}

impl LabelPlacement {
    pub fn for_field(focused: bool, text: &str) -> Self {
        if focused || !text.is_empty() {
            Self::Floating
        } else {
            Self::Placeholder
        }
    }
}

/// A labeled, outlined, single-line text field that owns its value.
///
/// Text, cursor, border and label all use the on-background tone whether or
/// not the field has focus.
pub struct LabeledTextField {
    label: String,
    keyboard: KeyboardType,
    transformation: VisualTransformation,
    leading_icon: Option<Icon>,
    text: String,
}

impl LabeledTextField {
    pub const HEIGHT: f32 = 56.0;
    const ICON_SIZE: f32 = 18.0;
    const H_PADDING: i8 = 12;

    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            keyboard: KeyboardType::default(),
            transformation: VisualTransformation::default(),
            leading_icon: None,
            text: String::new(),
        }
    }

    pub fn keyboard(mut self, keyboard: KeyboardType) -> Self {
        self.keyboard = keyboard;
        self
    }

    pub fn visual_transformation(mut self, transformation: VisualTransformation) -> Self {
        self.transformation = transformation;
        self
    }

    pub fn leading_icon(mut self, icon: Icon) -> Self {
        self.leading_icon = Some(icon);
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn keyboard_type(&self) -> KeyboardType {
        self.keyboard
    }

    /// Stored value, exactly as typed.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn on_value_change(&mut self, value: impl Into<String>) {
        self.text = value.into();
    }

    /// Value as rendered, after the visual transformation.
    #[cfg(test)]
    pub fn displayed(&self) -> Cow<'_, str> {
        self.transformation.apply(&self.text)
    }

    /// Widget id, derived from the label so it survives re-creation.
    pub fn id(&self) -> Id {
        Id::new(("labeled_text_field", self.label()))
    }

    pub fn show(&mut self, ui: &mut Ui, theme: &AppTheme) -> Response {
        let tone = theme.palette.on_background;
        let font = theme.typography.body1.clone();
        let id = self.id();
        let focused = ui.memory(|m| m.has_focus(id));
        let placement = LabelPlacement::for_field(focused, &self.text);

        let frame = egui::Frame::new()
            .stroke(Stroke::new(1.0, tone))
            .corner_radius(theme.shapes.small)
            .inner_margin(Margin::symmetric(Self::H_PADDING, 0));

        let transformation = self.transformation;
        let leading_icon = self.leading_icon;
        let label = self.label();
        let mut value = self.text().to_owned();
        // Draws the transformed value; the buffer itself stays untouched.
        let mut layouter = |ui: &Ui, buffer: &dyn TextBuffer, wrap_width: f32| -> Arc<Galley> {
            let shown = transformation.apply(buffer.as_str()).into_owned();
            let mut job = LayoutJob::simple_singleline(shown, font.clone(), tone);
            job.wrap.max_width = wrap_width;
            ui.fonts(|f| f.layout_job(job))
        };
        let framed = frame.show(ui, |ui| {
            let size = vec2(ui.available_width(), Self::HEIGHT);
            ui.allocate_ui_with_layout(size, Layout::left_to_right(Align::Center), |ui| {
                ui.set_min_size(size);
                ui.visuals_mut().text_cursor.stroke.color = tone;
                if let Some(icon) = leading_icon {
                    ui.add(
                        Image::new(icon.source())
                            .tint(tone)
                            .fit_to_exact_size(Vec2::splat(Self::ICON_SIZE)),
                    );
                }
                let mut edit = TextEdit::singleline(&mut value)
                    .id(id)
                    .frame(false)
                    .font(font.clone())
                    .text_color(tone)
                    .password(transformation.masks())
                    .layouter(&mut layouter)
                    .desired_width(f32::INFINITY);
                if placement == LabelPlacement::Placeholder {
                    edit = edit.hint_text(RichText::new(label).font(font.clone()).color(tone));
                }
                ui.add(edit)
            })
            .inner
        });

        let response = framed.inner;
        if response.changed() {
            self.on_value_change(value);
        }

        if placement == LabelPlacement::Floating {
            let painter = ui.painter();
            let galley = painter.layout_no_wrap(
                self.label.clone(),
                theme.typography.caption.clone(),
                tone,
            );
            let border = framed.response.rect;
            let pos = pos2(border.left() + f32::from(Self::H_PADDING), border.top());
            let label_rect =
                Align2::LEFT_CENTER.anchor_size(pos, galley.size() + vec2(8.0, 0.0));
            painter.rect_filled(label_rect, 0.0, ui.visuals().panel_fill);
            painter.galley(label_rect.min + vec2(4.0, 0.0), galley, tone);
        }

        if response.gained_focus() {
            ui.ctx()
                .send_viewport_cmd(ViewportCommand::IMEPurpose(self.keyboard_type().ime_purpose()));
        }
        response
    }
}
