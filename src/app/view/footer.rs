// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/footer.rs
//
// Status line shown in the window title: status, labels and key hints.

use crate::app::AppModel;
use crate::fl;

pub fn view(model: &AppModel) -> String {
    let mut parts = vec![
        model.status.text(),
        model.coords_label(),
        model.size_label(),
        fl!("hint-pick"),
    ];

    if model.actions_visible {
        parts.push(fl!("hint-actions"));
    }
    parts.push(fl!("hint-quit"));

    parts.join("  |  ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::model::tests::model;
    use crate::domain::geometry::DisplayPoint;

    #[test]
    fn action_hints_follow_visibility() {
        let mut model = model();
        assert!(!view(&model).contains(&fl!("hint-actions")));

        model.actions_visible = true;
        assert!(view(&model).contains(&fl!("hint-actions")));
    }

    #[test]
    fn labels_follow_a_drag() {
        let mut model = model();
        model.selection.reset();
        model.selection.place_point(DisplayPoint::new(10, 10), &model.mapper);
        model.selection.place_point(DisplayPoint::new(50, 50), &model.mapper);
        model.selection.start_drag(crate::app::view::pick::PointSlot::Second);
        model.selection.update_drag(DisplayPoint::new(60, 60), &model.mapper);
        model.refresh_magnifier();

        let title = view(&model);
        assert!(title.contains("Point1: (16, 16) | Point2: (96, 96)"));
        assert!(title.contains("80 x 80"));
    }
}
