//! State types for the admin TUI

use std::collections::HashSet;

use crate::types::MediaKind;

/// Active tab in the admin TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTab {
    #[default]
    Projects,
    Media,
    Content,
}

impl AdminTab {
    pub const ALL: [AdminTab; 3] = [AdminTab::Projects, AdminTab::Media, AdminTab::Content];

    pub fn name(&self) -> &'static str {
        match self {
            AdminTab::Projects => "Projects",
            AdminTab::Media => "Media",
            AdminTab::Content => "Content",
        }
    }

    pub fn next(self) -> Self {
        match self {
            AdminTab::Projects => AdminTab::Media,
            AdminTab::Media => AdminTab::Content,
            AdminTab::Content => AdminTab::Projects,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            AdminTab::Projects => AdminTab::Content,
            AdminTab::Media => AdminTab::Projects,
            AdminTab::Content => AdminTab::Media,
        }
    }
}

/// Navigation state for a single tab's list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationData {
    pub selected_index: usize,
    pub scroll_offset: usize,
    /// Multi-selected record ids (media tab bulk delete)
    pub selected_ids: HashSet<String>,
}

impl NavigationData {
    pub fn reset(&mut self) {
        self.selected_index = 0;
        self.scroll_offset = 0;
        self.selected_ids.clear();
    }
}

/// Which field of the add-media form has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MediaFormField {
    #[default]
    Name,
    Url,
    Kind,
}

impl MediaFormField {
    pub fn next(self) -> Self {
        match self {
            MediaFormField::Name => MediaFormField::Url,
            MediaFormField::Url => MediaFormField::Kind,
            MediaFormField::Kind => MediaFormField::Name,
        }
    }
}

/// The add-media form. Opens with empty defaults and resets to them after a
/// successful insert.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaForm {
    pub file_name: String,
    pub file_url: String,
    pub file_type: MediaKind,
    pub focused: MediaFormField,
}

impl MediaForm {
    pub fn cycle_kind(&mut self) {
        self.file_type = match self.file_type {
            MediaKind::Image => MediaKind::Video,
            _ => MediaKind::Image,
        };
    }

    /// Push a character into the focused text field.
    pub fn input(&mut self, c: char) {
        match self.focused {
            MediaFormField::Name => self.file_name.push(c),
            MediaFormField::Url => self.file_url.push(c),
            MediaFormField::Kind => {
                if c == ' ' {
                    self.cycle_kind();
                }
            }
        }
    }

    /// Delete the last character of the focused text field.
    pub fn backspace(&mut self) {
        match self.focused {
            MediaFormField::Name => {
                self.file_name.pop();
            }
            MediaFormField::Url => {
                self.file_url.pop();
            }
            MediaFormField::Kind => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_cycle_roundtrip() {
        for tab in AdminTab::ALL {
            assert_eq!(tab.next().prev(), tab);
        }
        assert_eq!(AdminTab::Content.next(), AdminTab::Projects);
    }

    #[test]
    fn test_media_form_input_routing() {
        let mut form = MediaForm::default();
        form.input('a');
        form.focused = MediaFormField::Url;
        form.input('x');
        assert_eq!(form.file_name, "a");
        assert_eq!(form.file_url, "x");

        form.backspace();
        assert_eq!(form.file_url, "");
    }

    #[test]
    fn test_media_form_kind_cycles_with_space() {
        let mut form = MediaForm {
            focused: MediaFormField::Kind,
            ..Default::default()
        };
        assert_eq!(form.file_type, MediaKind::Image);
        form.input(' ');
        assert_eq!(form.file_type, MediaKind::Video);
        form.input('z');
        assert_eq!(form.file_type, MediaKind::Video);
    }
}
