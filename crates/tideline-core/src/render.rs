// File: crates/tideline-core/src/render.rs
// Summary: Scene building: grid, axes, series paths, point markers and legend for one chart.

use tracing::debug;

use crate::axis::{Axis, Orient, TICK_PADDING, TICK_SIZE};
use crate::chart::RenderOptions;
use crate::classify::ChartData;
use crate::curve::monotone_x;
use crate::geometry::{Pos, RectF};
use crate::grid::{gridlines, GRID_DASH, GRID_OPACITY};
use crate::legend::legend_elements;
use crate::scene::{Element, Layer, Scene, Stroke, TextAnchor};
use crate::series::Point;
use crate::text::TextMeasure;
use crate::theme::Theme;
use crate::view::ChartView;
use crate::visibility::Visibility;

const AXIS_FONT_SIZE: f32 = 10.0;

/// Build a complete scene from scratch. Identical inputs give equal scenes.
pub fn build_scene(
    data: &ChartData,
    visibility: &Visibility,
    view: &ChartView,
    opts: &RenderOptions,
    measure: &dyn TextMeasure,
) -> Scene {
    let width = view.content_width as f32;
    let height = view.plot_height as f32;
    let insets = opts.insets;
    let mut scene = Scene::new(
        width + insets.hsum() as f32,
        opts.height,
        Pos::new(insets.left as f32, insets.top as f32),
        RectF::from_ltwh(0.0, 0.0, width, height),
        opts.theme.background,
    );

    let x_axis = Axis::bottom(&view.x);
    let y_axis = Axis::left(&view.y);

    push_axis(&mut scene, &x_axis, height, opts);
    push_axis(&mut scene, &y_axis, height, opts);
    push_grid(&mut scene, &x_axis, height, &opts.theme);
    push_grid(&mut scene, &y_axis, width, &opts.theme);

    match data {
        ChartData::Single(points) => {
            if let Some(path) = series_path(points, view, Stroke::solid(opts.theme.line_stroke, opts.line_width)) {
                scene.push(Layer::Series, path);
            }
            scene.extend(
                Layer::Markers,
                points.iter().map(|p| {
                    let (x, y) = view.to_px(p.x, p.y);
                    Element::Circle {
                        center: Pos::new(x as f32, y as f32),
                        radius: opts.marker_radius,
                        fill: opts.theme.line_stroke,
                    }
                }),
            );
        }
        ChartData::Multi { series, .. } => {
            for (i, points) in series.iter() {
                if !visibility.is_visible(i) {
                    continue;
                }
                let stroke = Stroke::solid(opts.theme.series[i], opts.line_width);
                if let Some(path) = series_path(points, view, stroke) {
                    scene.push(Layer::Series, path);
                }
            }
            scene.extend(Layer::Legend, legend_elements(width, &opts.theme, measure));
        }
    }

    debug!(kind = ?data.kind(), items = scene.items().len(), width, "built scene");
    scene
}

fn series_path(points: &[Point], view: &ChartView, stroke: Stroke) -> Option<Element> {
    if points.is_empty() {
        return None;
    }
    let px: Vec<(f64, f64)> = points.iter().map(|p| view.to_px(p.x, p.y)).collect();
    Some(Element::Path { cmds: monotone_x(&px), stroke })
}

fn push_axis(scene: &mut Scene, axis: &Axis, plot_height: f32, opts: &RenderOptions) {
    let stroke = Stroke::solid(opts.theme.axis_line, 1.0);
    let (start, end) = (axis.start.min(axis.end), axis.start.max(axis.end));
    let mut elems = Vec::with_capacity(3 + 2 * axis.ticks.len());

    match axis.orient {
        Orient::Bottom => {
            let y = plot_height;
            elems.push(Element::Line { from: Pos::new(start, y), to: Pos::new(end, y), stroke });
            elems.push(Element::Line { from: Pos::new(start, y), to: Pos::new(start, y + TICK_SIZE), stroke });
            elems.push(Element::Line { from: Pos::new(end, y), to: Pos::new(end, y + TICK_SIZE), stroke });
            for t in &axis.ticks {
                elems.push(Element::Line { from: Pos::new(t.offset, y), to: Pos::new(t.offset, y + TICK_SIZE), stroke });
                if opts.draw_labels {
                    elems.push(Element::Text {
                        pos: Pos::new(t.offset, y + TICK_SIZE + TICK_PADDING),
                        text: t.label.clone(),
                        size: AXIS_FONT_SIZE,
                        color: opts.theme.axis_label,
                        anchor: TextAnchor::Middle,
                        dy_em: 0.71,
                    });
                }
            }
        }
        Orient::Left => {
            elems.push(Element::Line { from: Pos::new(0.0, start), to: Pos::new(0.0, end), stroke });
            elems.push(Element::Line { from: Pos::new(-TICK_SIZE, start), to: Pos::new(0.0, start), stroke });
            elems.push(Element::Line { from: Pos::new(-TICK_SIZE, end), to: Pos::new(0.0, end), stroke });
            for t in &axis.ticks {
                elems.push(Element::Line { from: Pos::new(-TICK_SIZE, t.offset), to: Pos::new(0.0, t.offset), stroke });
                if opts.draw_labels {
                    elems.push(Element::Text {
                        pos: Pos::new(-(TICK_SIZE + TICK_PADDING), t.offset),
                        text: t.label.clone(),
                        size: AXIS_FONT_SIZE,
                        color: opts.theme.axis_label,
                        anchor: TextAnchor::End,
                        dy_em: 0.32,
                    });
                }
            }
        }
    }
    scene.extend(Layer::Axis, elems);
}

fn push_grid(scene: &mut Scene, axis: &Axis, span: f32, theme: &Theme) {
    let stroke = Stroke { color: theme.grid, width: 1.0, dash: Some(GRID_DASH), opacity: GRID_OPACITY };
    scene.extend(
        Layer::Grid,
        gridlines(axis, span).into_iter().map(|g| Element::Line { from: g.from, to: g.to, stroke }),
    );
}
