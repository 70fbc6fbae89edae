// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Page seam for embedding the donation widget.

/// Message shown in place of the widget when it cannot be loaded.
pub const WIDGET_ERROR_MESSAGE: &str =
    "Error: Could not load the donation widget. Please try again later.";

/// Referrer policy applied to the embedded on-ramp frame.
pub const FRAME_REFERRER_POLICY: &str = "strict-origin-when-cross-origin";

/// Height recommended by the on-ramp for its widget, in pixels.
pub const FRAME_HEIGHT: u32 = 625;

/// A page that can look up widget containers by element id.
pub trait DocumentHost {
    fn container_mut(&mut self, id: &str) -> Option<&mut dyn WidgetContainer>;
}

/// An element that can hold the donation widget.
pub trait WidgetContainer {
    fn clear(&mut self);

    fn append_frame(&mut self, frame: IframeEmbed);

    /// Replace the whole content with a user-visible error.
    fn show_error(&mut self, message: &str);
}

/// Iframe pointing at a one-time widget URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IframeEmbed {
    pub src: String,
    pub width: String,
    pub height: u32,
    pub referrer_policy: &'static str,
}

impl IframeEmbed {
    pub fn for_widget(url: impl Into<String>) -> Self {
        Self {
            src: url.into(),
            width: "100%".to_string(),
            height: FRAME_HEIGHT,
            referrer_policy: FRAME_REFERRER_POLICY,
        }
    }

    /// Render as HTML markup.
    pub fn to_html(&self) -> String {
        format!(
            r#"<iframe src="{}" width="{}" height="{}" style="border: none" referrerpolicy="{}"></iframe>"#,
            escape_attr(&self.src),
            escape_attr(&self.width),
            self.height,
            self.referrer_policy
        )
    }
}

fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
