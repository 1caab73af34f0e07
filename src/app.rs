use std::time::Instant;

use eframe::egui::{self, Color32, CornerRadius, Pos2, Shape, Stroke};

use crate::playback::{Playback, TickClock};
use crate::viewport::ViewTransform;

const BACKGROUND: Color32 = Color32::from_rgb(10, 12, 22);
const CURVE_STROKE: Stroke = Stroke {
    width: 1.3,
    color: Color32::from_rgb(120, 220, 160),
};

pub struct WalkApp {
    playback: Playback,
    clock: TickClock,
    step_burst: u32,
}

impl WalkApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            playback: Playback::new(),
            clock: TickClock::new(),
            step_burst: 10,
        }
    }

    fn draw_controls(&mut self, ui: &mut egui::Ui) {
        ui.heading("Turning Walk");
        let params = self.playback.params();

        let mut step_len = params.step_len;
        if ui
            .add(egui::Slider::new(&mut step_len, -60.0..=60.0).text("step length"))
            .changed()
        {
            self.playback.set_step_len(step_len);
        }

        let mut turn_delta = params.turn_delta_deg;
        if ui
            .add(egui::Slider::new(&mut turn_delta, -30.0..=30.0).text("turn delta (deg)"))
            .changed()
        {
            self.playback.set_turn_delta(turn_delta);
        }

        let mut tick_rate = params.tick_rate_hz;
        if ui
            .add(
                egui::Slider::new(&mut tick_rate, 1.0..=240.0)
                    .logarithmic(true)
                    .text("tick rate (Hz)"),
            )
            .changed()
        {
            self.playback.set_tick_rate(tick_rate);
        }

        let mut steps_per_tick = params.steps_per_tick;
        if ui
            .add(egui::Slider::new(&mut steps_per_tick, 1..=64).text("steps per tick"))
            .changed()
        {
            self.playback.set_steps_per_tick(steps_per_tick);
        }

        let mut reset_on_change = params.reset_on_change;
        if ui
            .checkbox(&mut reset_on_change, "reset on parameter change")
            .changed()
        {
            self.playback.set_reset_on_change(reset_on_change);
        }

        ui.separator();
        ui.horizontal(|ui| {
            if ui
                .button(if self.playback.is_running() {
                    "Stop"
                } else {
                    "Start"
                })
                .clicked()
            {
                if self.playback.is_running() {
                    self.playback.stop();
                } else {
                    self.playback.start();
                    self.clock.rewind();
                }
            }

            if ui.button("Reset").clicked() {
                self.playback.reset();
            }
        });

        ui.horizontal(|ui| {
            if ui.button("Step").clicked() {
                self.playback.single_step(self.step_burst);
            }
            ui.add(egui::DragValue::new(&mut self.step_burst).range(1..=1000));
            ui.label("points");
        });
    }

    fn draw_canvas(&mut self, ui: &mut egui::Ui) {
        let extent = self.playback.extent();
        ui.horizontal(|ui| {
            ui.label(format!("points: {}", self.playback.points().len()));
            ui.separator();
            ui.label(format!(
                "extent: {:.1} x {:.1}",
                extent.width(),
                extent.height()
            ));
            ui.separator();
            ui.label(format!("frame: {}", self.playback.frames()));
        });

        ui.separator();

        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::hover());
        let rect = response.rect;
        painter.rect_filled(rect, CornerRadius::ZERO, BACKGROUND);

        let points = self.playback.points();
        if points.len() < 2 {
            return;
        }

        let view = ViewTransform::fit(extent, f64::from(rect.width()), f64::from(rect.height()));
        let center = rect.center();
        let path: Vec<Pos2> = points
            .iter()
            .map(|&p| {
                let (x, y) = view.apply(p);
                Pos2::new(center.x + x as f32, center.y + y as f32)
            })
            .collect();

        painter.add(Shape::line(path, CURVE_STROKE));
    }
}

impl eframe::App for WalkApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.playback.is_running() && self.clock.due(Instant::now(), self.playback.tick_delay())
        {
            self.playback.tick();
        }

        egui::SidePanel::left("controls")
            .resizable(true)
            .default_width(260.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        self.draw_controls(ui);
                    });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_canvas(ui);
        });

        if self.playback.is_running() {
            ctx.request_repaint_after(self.playback.tick_delay());
        }
    }
}
