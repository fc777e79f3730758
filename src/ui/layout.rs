use ratatui::layout::Rect;

/// Screen regions, top to bottom.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Regions {
    pub title: Rect,
    pub rows: Rect,
    pub snackbar: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect) -> Regions {
    let title_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(title_height));
    let snackbar_height = 1.min(area.height.saturating_sub(title_height + footer_height));
    let rows_height =
        area.height.saturating_sub(title_height + footer_height + snackbar_height);

    let title = Rect {
        height: title_height,
        ..area
    };
    let rows = Rect {
        y: area.y + title_height,
        height: rows_height,
        ..area
    };
    let snackbar = Rect {
        y: rows.y + rows_height,
        height: snackbar_height,
        ..area
    };
    let footer = Rect {
        y: area.y + area.height.saturating_sub(footer_height),
        height: footer_height,
        ..area
    };
    Regions {
        title,
        rows,
        snackbar,
        footer,
    }
}

/// A `width` x `height` rect centred in `area`, clamped to fit.
pub fn centered_rect_by_size(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
