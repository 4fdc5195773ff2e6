// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/update.rs
//
// Apply messages to the session, in arrival order, one at a time.

use crate::app::clipboard::ClipboardSink;
use crate::app::message::AppMessage;
use crate::app::model::{AppModel, Status};
use crate::app::view::pick::PointSlot;
use crate::domain::geometry::DisplayPoint;
use crate::domain::operations::{ExportOutcome, RegionExporter};

/// Whether the frame needs to be composed again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateResult {
    None,
    Redraw,
}

/// Collaborators reached by explicit user actions.
pub struct Services<'a> {
    pub clipboard: &'a mut dyn ClipboardSink,
    pub exporter: &'a RegionExporter,
}

pub fn update(model: &mut AppModel, message: AppMessage, services: &mut Services<'_>) -> UpdateResult {
    match message {
        AppMessage::StartPicking => start_picking(model),
        AppMessage::PlacePoint(pos) => place_point(model, pos),
        AppMessage::PointerPressed(pos) => pointer_pressed(model, pos),
        AppMessage::PointerMoved(pos) => pointer_moved(model, pos),
        AppMessage::PointerReleased => pointer_released(model),
        AppMessage::Nudge(direction) => {
            if model.selection.nudge(direction, &model.mapper).is_none() {
                return UpdateResult::None;
            }
            model.refresh_magnifier();
            UpdateResult::Redraw
        }
        AppMessage::CopyCoordinates => copy_coordinates(model, &mut *services.clipboard),
        AppMessage::ExportRegion => export_region(model, services.exporter),
    }
}

fn start_picking(model: &mut AppModel) -> UpdateResult {
    model.selection.reset();
    model.refresh_magnifier();
    model.actions_visible = false;
    model.hovering_point = false;
    model.status = Status::PlaceFirst;
    UpdateResult::Redraw
}

fn place_point(model: &mut AppModel, pos: DisplayPoint) -> UpdateResult {
    match model.selection.place_point(pos, &model.mapper) {
        Some(PointSlot::First) => model.status = Status::PlaceSecond,
        Some(PointSlot::Second) => {
            model.status = Status::Adjust;
            model.actions_visible = true;
        }
        None => return UpdateResult::None,
    }
    UpdateResult::Redraw
}

fn pointer_pressed(model: &mut AppModel, pos: DisplayPoint) -> UpdateResult {
    match model.selection.hit_test(pos) {
        Some(slot) if model.selection.start_drag(slot) => UpdateResult::Redraw,
        _ => UpdateResult::None,
    }
}

fn pointer_moved(model: &mut AppModel, pos: DisplayPoint) -> UpdateResult {
    if model.selection.update_drag(pos, &model.mapper).is_some() {
        model.refresh_magnifier();
        return UpdateResult::Redraw;
    }
    model.hovering_point = model.selection.hit_test(pos).is_some();
    UpdateResult::None
}

fn pointer_released(model: &mut AppModel) -> UpdateResult {
    if model.selection.drag().is_none() {
        return UpdateResult::None;
    }
    model.selection.end_drag();
    model.refresh_magnifier();
    UpdateResult::Redraw
}

fn copy_coordinates(model: &mut AppModel, clipboard: &mut dyn ClipboardSink) -> UpdateResult {
    let Some(text) = model.clipboard_text() else {
        return UpdateResult::None;
    };

    model.status = match clipboard.set_text(&text) {
        Ok(()) => {
            log::debug!("Copied \"{text}\"");
            Status::Copied
        }
        Err(e) => {
            log::error!("Copy failed: {e:#}");
            Status::CopyFailed
        }
    };
    UpdateResult::Redraw
}

fn export_region(model: &mut AppModel, exporter: &RegionExporter) -> UpdateResult {
    let points = model.selection.source_points(&model.mapper);

    model.status = match exporter.export(&model.source, points) {
        Ok(None) => return UpdateResult::None,
        Ok(Some(ExportOutcome::Empty)) => Status::RegionEmpty,
        Ok(Some(outcome)) => Status::Exported(outcome.file_name().unwrap_or_default()),
        Err(e) => {
            log::error!("Export failed: {e:#}");
            Status::ExportFailed(e.to_string())
        }
    };
    UpdateResult::Redraw
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::model::tests::model;
    use crate::app::view::pick::{Direction, PickState};

    #[derive(Default)]
    struct RecordingClipboard {
        texts: Vec<String>,
        fail: bool,
    }

    impl ClipboardSink for RecordingClipboard {
        fn set_text(&mut self, text: &str) -> anyhow::Result<()> {
            if self.fail {
                anyhow::bail!("clipboard unavailable");
            }
            self.texts.push(text.to_string());
            Ok(())
        }
    }

    struct Harness {
        model: AppModel,
        clipboard: RecordingClipboard,
        exporter: RegionExporter,
        _dir: tempfile::TempDir,
    }

    impl Harness {
        fn new() -> Self {
            let dir = tempfile::tempdir().unwrap();
            Self {
                model: model(),
                clipboard: RecordingClipboard::default(),
                exporter: RegionExporter::new(dir.path().join("export")),
                _dir: dir,
            }
        }

        fn send(&mut self, message: AppMessage) -> UpdateResult {
            let mut services = Services {
                clipboard: &mut self.clipboard,
                exporter: &self.exporter,
            };
            update(&mut self.model, message, &mut services)
        }

        fn send_all(&mut self, messages: &[AppMessage]) {
            for message in messages {
                self.send(*message);
            }
        }

        fn exported_files(&self) -> Vec<String> {
            std::fs::read_dir(self.exporter.dir())
                .map(|entries| {
                    entries
                        .filter_map(Result::ok)
                        .map(|e| e.file_name().to_string_lossy().into_owned())
                        .collect()
                })
                .unwrap_or_default()
        }
    }

    fn p(x: i32, y: i32) -> DisplayPoint {
        DisplayPoint::new(x, y)
    }

    fn picked(first: DisplayPoint, second: DisplayPoint) -> Harness {
        let mut harness = Harness::new();
        harness.send_all(&[
            AppMessage::StartPicking,
            AppMessage::PlacePoint(first),
            AppMessage::PlacePoint(second),
        ]);
        harness
    }

    #[test]
    fn picking_reveals_actions_and_copies_source_coordinates() {
        let mut h = Harness::new();
        assert_eq!(h.model.status, Status::Idle);

        h.send(AppMessage::StartPicking);
        assert_eq!(h.model.status, Status::PlaceFirst);
        assert!(!h.model.actions_visible);

        h.send(AppMessage::PlacePoint(p(100, 100)));
        assert_eq!(h.model.status, Status::PlaceSecond);
        assert!(!h.model.actions_visible);

        h.send(AppMessage::PlacePoint(p(200, 200)));
        assert_eq!(h.model.status, Status::Adjust);
        assert!(h.model.actions_visible);

        let rect = h.model.selection.rectangle().unwrap();
        assert_eq!((rect.left, rect.top, rect.right, rect.bottom), (100, 100, 200, 200));

        assert_eq!(h.send(AppMessage::CopyCoordinates), UpdateResult::Redraw);
        assert_eq!(h.clipboard.texts, ["Point1: (160, 160) | Point2: (320, 320)"]);
        assert_eq!(h.model.status, Status::Copied);
    }

    #[test]
    fn third_placement_is_ignored() {
        let mut h = picked(p(100, 100), p(200, 200));
        assert_eq!(h.send(AppMessage::PlacePoint(p(500, 500))), UpdateResult::None);
        assert_eq!(h.model.selection.point(PointSlot::First), Some(p(100, 100)));
        assert_eq!(h.model.selection.point(PointSlot::Second), Some(p(200, 200)));
    }

    #[test]
    fn placement_before_picking_is_ignored() {
        let mut h = Harness::new();
        assert_eq!(h.send(AppMessage::PlacePoint(p(10, 10))), UpdateResult::None);
        assert_eq!(h.model.selection.state(), PickState::Idle);
        assert_eq!(h.model.status, Status::Idle);
    }

    #[test]
    fn restarting_hides_actions_and_clears_points() {
        let mut h = picked(p(100, 100), p(200, 200));
        h.send(AppMessage::StartPicking);

        assert!(!h.model.actions_visible);
        assert_eq!(h.model.status, Status::PlaceFirst);
        assert_eq!(h.model.selection.rectangle(), None);
        assert_eq!(h.model.coords_label(), "Point1: - | Point2: -");
    }

    #[test]
    fn drag_clamps_and_shows_magnifier_after_first_move() {
        let mut h = picked(p(100, 100), p(200, 200));

        assert_eq!(h.send(AppMessage::PointerPressed(p(101, 99))), UpdateResult::Redraw);
        assert!(h.model.magnifier.is_none());

        h.send(AppMessage::PointerMoved(p(-50, -50)));
        assert_eq!(h.model.selection.point(PointSlot::First), Some(p(0, 0)));
        assert_eq!(
            h.model.selection.source_points(&h.model.mapper)[0],
            Some(crate::domain::geometry::SourcePoint::new(0, 0))
        );
        let view = h.model.magnifier.as_ref().unwrap();
        assert_eq!(view.caption, "(0, 0)");

        let rect = h.model.selection.rectangle().unwrap();
        assert_eq!((rect.left, rect.top, rect.right, rect.bottom), (0, 0, 200, 200));

        h.send(AppMessage::PointerReleased);
        assert!(h.model.magnifier.is_none());
        assert!(h.model.selection.drag().is_none());
    }

    #[test]
    fn press_outside_markers_does_not_drag() {
        let mut h = picked(p(100, 100), p(200, 200));
        assert_eq!(h.send(AppMessage::PointerPressed(p(150, 150))), UpdateResult::None);
        h.send(AppMessage::PointerMoved(p(160, 160)));
        assert_eq!(h.model.selection.point(PointSlot::First), Some(p(100, 100)));
        assert!(h.model.magnifier.is_none());
    }

    #[test]
    fn hovering_a_marker_switches_cursor() {
        use crate::app::model::CursorHint;

        let mut h = picked(p(100, 100), p(200, 200));
        h.send(AppMessage::PointerMoved(p(198, 201)));
        assert_eq!(h.model.cursor(), CursorHint::Hand);
        h.send(AppMessage::PointerMoved(p(150, 150)));
        assert_eq!(h.model.cursor(), CursorHint::Crosshair);
    }

    #[test]
    fn restarting_drops_the_hover_cursor() {
        use crate::app::model::CursorHint;

        let mut h = picked(p(100, 100), p(200, 200));
        h.send(AppMessage::PointerMoved(p(100, 100)));
        assert_eq!(h.model.cursor(), CursorHint::Hand);

        h.send(AppMessage::StartPicking);
        assert!(!h.model.hovering_point);
        assert_eq!(h.model.cursor(), CursorHint::Crosshair);
    }

    #[test]
    fn arrow_keys_nudge_the_dragged_point() {
        let mut h = picked(p(100, 100), p(200, 200));
        h.send_all(&[
            AppMessage::PointerPressed(p(200, 200)),
            AppMessage::PointerMoved(p(300, 40)),
            AppMessage::Nudge(Direction::Up),
            AppMessage::Nudge(Direction::Up),
        ]);

        assert_eq!(h.model.selection.point(PointSlot::Second), Some(p(300, 38)));
        assert_eq!(h.model.magnifier.as_ref().unwrap().anchor, p(300, 38));
        assert_eq!(h.model.selection.rectangle().unwrap().top, 38);
    }

    #[test]
    fn arrow_keys_without_drag_do_nothing() {
        let mut h = picked(p(100, 100), p(200, 200));
        assert_eq!(h.send(AppMessage::Nudge(Direction::Left)), UpdateResult::None);
        assert_eq!(h.model.selection.point(PointSlot::First), Some(p(100, 100)));
    }

    #[test]
    fn nudge_near_top_edge_clamps() {
        let mut h = picked(p(100, 1), p(200, 200));
        h.send_all(&[
            AppMessage::PointerPressed(p(100, 1)),
            AppMessage::Nudge(Direction::Up),
            AppMessage::Nudge(Direction::Up),
        ]);
        assert_eq!(h.model.selection.point(PointSlot::First), Some(p(100, 0)));
    }

    #[test]
    fn export_writes_png_and_reports_filename() {
        let mut h = picked(p(200, 200), p(100, 100));
        assert_eq!(h.send(AppMessage::ExportRegion), UpdateResult::Redraw);

        let expected = "01.01.25_160.160_320.320.png";
        assert_eq!(h.model.status, Status::Exported(expected.to_string()));
        assert_eq!(h.exported_files(), [expected]);
    }

    #[test]
    fn export_with_one_point_changes_nothing() {
        let mut h = Harness::new();
        h.send_all(&[AppMessage::StartPicking, AppMessage::PlacePoint(p(100, 100))]);
        let before = h.model.status.clone();

        assert_eq!(h.send(AppMessage::ExportRegion), UpdateResult::None);
        assert_eq!(h.model.status, before);
        assert!(h.exported_files().is_empty());
        assert!(!h.exporter.dir().exists());
    }

    #[test]
    fn copy_with_one_point_changes_nothing() {
        let mut h = Harness::new();
        h.send_all(&[AppMessage::StartPicking, AppMessage::PlacePoint(p(100, 100))]);

        assert_eq!(h.send(AppMessage::CopyCoordinates), UpdateResult::None);
        assert!(h.clipboard.texts.is_empty());
        assert_eq!(h.model.status, Status::PlaceSecond);
    }

    #[test]
    fn empty_region_is_reported() {
        let mut h = picked(p(100, 100), p(100, 300));
        h.send(AppMessage::ExportRegion);
        assert_eq!(h.model.status, Status::RegionEmpty);
        assert!(h.exported_files().is_empty());
    }

    #[test]
    fn clipboard_failure_is_not_fatal() {
        let mut h = picked(p(100, 100), p(200, 200));
        h.clipboard.fail = true;
        h.send(AppMessage::CopyCoordinates);
        assert_eq!(h.model.status, Status::CopyFailed);
        assert_eq!(h.model.selection.state(), PickState::Ready);
    }
}
