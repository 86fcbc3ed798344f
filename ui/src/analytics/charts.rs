use api::BatchRecord;
use dioxus::prelude::*;

use crate::core::format;
use crate::core::history::{size_slices, QualitySplit, SizeClass, SizeSlice};
use crate::t;

// Radius giving a circumference of 100, so dash lengths read as percentages.
const DONUT_RADIUS: f64 = 15.915_494_309_189_533;
const DONUT_CIRCUMFERENCE: f64 = 100.0;

/// One ring segment: `length` of the stroke and where along the ring it starts,
/// both in percent of the circumference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct DonutArc {
    pub class: SizeClass,
    pub length: f64,
    pub start: f64,
}

impl DonutArc {
    fn dasharray(&self) -> String {
        format!("{} {}", self.length, DONUT_CIRCUMFERENCE - self.length)
    }

    // Stroke starts at 3 o'clock; shift a quarter turn to begin at 12.
    fn dashoffset(&self) -> f64 {
        DONUT_CIRCUMFERENCE / 4.0 - self.start
    }
}

/// Lay the size slices end to end around the ring, largest class first.
///
/// Lengths are shares of `total`; when the size counts add up to more than the
/// total the ring is cut off at 100% rather than overlapping itself.
pub(crate) fn donut_arcs(slices: &[SizeSlice], total: u64) -> Vec<DonutArc> {
    let total = total.max(1) as f64;
    let mut start = 0.0_f64;
    let mut arcs = Vec::with_capacity(slices.len());

    for slice in slices {
        let wanted = slice.value as f64 / total * DONUT_CIRCUMFERENCE;
        let length = wanted.min(DONUT_CIRCUMFERENCE - start).max(0.0);
        if length > 0.0 {
            arcs.push(DonutArc {
                class: slice.class,
                length,
                start,
            });
        }
        start += length;
    }

    arcs
}

fn size_label(class: SizeClass) -> String {
    match class {
        SizeClass::Large => t!("size-large"),
        SizeClass::Medium => t!("size-medium"),
        SizeClass::Small => t!("size-small"),
    }
}

#[component]
pub fn SizeDonut(batch: BatchRecord) -> Element {
    let slices = size_slices(&batch);
    let arcs = donut_arcs(&slices, batch.total);
    let total = batch.total;

    rsx! {
        section { class: "analytics-card size-chart",
            div { class: "size-chart__donut",
                svg {
                    class: "donut",
                    view_box: "0 0 42 42",
                    circle {
                        class: "donut__track",
                        cx: "21",
                        cy: "21",
                        r: "{DONUT_RADIUS}",
                        fill: "transparent",
                        stroke_width: "6",
                    }
                    for arc in arcs.into_iter() {
                        circle {
                            class: "donut__segment donut__segment--{arc.class.css_modifier()}",
                            cx: "21",
                            cy: "21",
                            r: "{DONUT_RADIUS}",
                            fill: "transparent",
                            stroke_width: "6",
                            stroke_dasharray: "{arc.dasharray()}",
                            stroke_dashoffset: "{arc.dashoffset()}",
                        }
                    }
                }
                div { class: "donut__center",
                    strong { class: "donut__total", "{total}" }
                    span { class: "donut__caption", {t!("control-total-beans")} }
                }
            }

            ul { class: "size-chart__legend",
                for slice in slices.into_iter() {
                    li { class: "legend__item",
                        span { class: "legend__swatch legend__swatch--{slice.class.css_modifier()}" }
                        span { class: "legend__label", {size_label(slice.class)} }
                        span { class: "legend__value", "{slice.value}" }
                        span { class: "legend__percent", "{slice.percent}%" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn QualityBar(batch: BatchRecord) -> Element {
    let split = QualitySplit::of(&batch);
    let bad_style = format::bar_width(split.bad_fraction() * 100.0);

    rsx! {
        section { class: "analytics-card quality-chart",
            div { class: "quality-chart__bar",
                div { class: "quality-chart__fill quality-chart__fill--bad", style: "{bad_style}" }
            }
            div { class: "quality-chart__legend",
                span { class: "legend__item",
                    span { class: "legend__swatch legend__swatch--good" }
                    span { class: "legend__label", {t!("quality-good")} }
                    span { class: "legend__value", "{split.good}" }
                }
                span { class: "legend__item",
                    span { class: "legend__swatch legend__swatch--bad" }
                    span { class: "legend__label", {t!("quality-bad")} }
                    span { class: "legend__value", "{split.bad}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(total: u64, large: u64, medium: u64, small: u64) -> BatchRecord {
        BatchRecord {
            id: 1,
            total,
            large,
            medium,
            small,
            ..BatchRecord::default()
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn arcs_follow_each_other_around_the_ring() {
        let record = batch(100, 50, 30, 20);
        let arcs = donut_arcs(&size_slices(&record), record.total);

        assert_eq!(arcs.len(), 3);
        assert_eq!(arcs[0].class, SizeClass::Large);
        assert!(close(arcs[0].length, 50.0) && close(arcs[0].start, 0.0));
        assert!(close(arcs[1].length, 30.0) && close(arcs[1].start, 50.0));
        assert!(close(arcs[2].length, 20.0) && close(arcs[2].start, 80.0));
    }

    #[test]
    fn empty_classes_draw_nothing() {
        let record = batch(10, 0, 10, 0);
        let arcs = donut_arcs(&size_slices(&record), record.total);
        assert_eq!(arcs.len(), 1);
        assert_eq!(arcs[0].class, SizeClass::Medium);
        assert!(close(arcs[0].length, 100.0));

        assert!(donut_arcs(&size_slices(&BatchRecord::EMPTY), 0).is_empty());
    }

    #[test]
    fn oversized_counts_are_cut_at_a_full_ring() {
        let record = batch(10, 8, 8, 8);
        let arcs = donut_arcs(&size_slices(&record), record.total);
        let drawn: f64 = arcs.iter().map(|arc| arc.length).sum();
        assert!(close(drawn, DONUT_CIRCUMFERENCE));
        assert_eq!(arcs.len(), 2);
    }

    #[test]
    fn first_arc_starts_at_twelve_o_clock() {
        let record = batch(4, 1, 1, 2);
        let arcs = donut_arcs(&size_slices(&record), record.total);
        assert_eq!(arcs[0].dasharray(), "25 75");
        assert!(close(arcs[0].dashoffset(), 25.0));
        assert!(close(arcs[1].dashoffset(), 0.0));
        assert!(close(arcs[2].dashoffset(), -25.0));
    }

    #[test]
    fn radius_matches_circumference() {
        let circumference = 2.0 * std::f64::consts::PI * DONUT_RADIUS;
        assert!((circumference - DONUT_CIRCUMFERENCE).abs() < 1e-6);
    }
}
