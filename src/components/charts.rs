use yew::prelude::*;

use crate::chart::{
    donut_arcs, pie_slices, spending_segments, stack_heights, CategoryTotal, MonthBar, OverviewTotals,
    PieGeometry, DONUT_CIRCUMFERENCE, OVERVIEW_CHART_HEIGHT, PIE_PALETTE,
};
use crate::locale::format_currency;

const INCOME_COLOR: &str = "#3B82F6";
const EXPENSES_COLOR: &str = "#60A5FA";
const SCHEDULED_COLOR: &str = "#A78BFA";
const SAVINGS_ARC_COLOR: &str = "#7C3AED";
const EXPENSES_ARC_COLOR: &str = "#3B82F6";

fn gradient_id(palette: usize) -> String {
    format!("grad{}", palette + 1)
}

#[derive(Properties, PartialEq)]
pub struct SpendingPieProps {
    pub categories: Vec<CategoryTotal>,
    #[prop_or_default]
    pub total: f64,
}

/// Top spending categories as a 3D-shaded pie with a legend.
#[function_component(SpendingPie)]
pub fn spending_pie(props: &SpendingPieProps) -> Html {
    let hovered = use_state(|| None::<usize>);
    let geometry = PieGeometry::default();
    let segments = spending_segments(&props.categories, props.total);
    let slices = pie_slices(&segments, props.total, &geometry);
    let size = geometry.size.to_string();
    let center = geometry.center();

    html! {
        <div class="flex flex-col md:flex-row items-center gap-6">
            <div class="relative" style={format!("width: {size}px; height: {size}px;")}>
                <svg width={size.clone()} height={size.clone()} style="filter: drop-shadow(0 10px 25px rgba(0,0,0,0.4));">
                    <defs>
                        { for PIE_PALETTE.iter().enumerate().map(|(i, stops)| html! {
                            <linearGradient id={gradient_id(i)} x1="0%" y1="0%" x2="100%" y2="100%">
                                <stop offset="0%" stop-color={stops[0]} />
                                <stop offset="50%" stop-color={stops[1]} />
                                <stop offset="100%" stop-color={stops[2]} />
                            </linearGradient>
                        }) }
                        <radialGradient id="gloss" cx="50%" cy="30%">
                            <stop offset="0%" stop-color="white" stop-opacity="0.4" />
                            <stop offset="50%" stop-color="white" stop-opacity="0.15" />
                            <stop offset="100%" stop-color="white" stop-opacity="0" />
                        </radialGradient>
                    </defs>

                    { for slices.iter().filter(|s| !s.shadow_path.is_empty()).map(|s| html! {
                        <path d={s.shadow_path.clone()} fill="rgba(0,0,0,0.3)" opacity="0.4" />
                    }) }

                    { for slices.iter().enumerate().filter(|(_, s)| !s.path.is_empty()).map(|(i, s)| {
                        let is_hovered = *hovered == Some(i);
                        let dimmed = hovered.is_some() && !is_hovered;
                        let style = format!(
                            "cursor: pointer; transform-origin: {center}px {center}px; transition: transform 0.3s; transform: {}; opacity: {};",
                            if is_hovered { "scale(1.05)" } else { "scale(1)" },
                            if dimmed { "0.6" } else { "1" },
                        );
                        let on_enter = {
                            let hovered = hovered.clone();
                            Callback::from(move |_| hovered.set(Some(i)))
                        };
                        let on_leave = {
                            let hovered = hovered.clone();
                            Callback::from(move |_| hovered.set(None))
                        };
                        html! {
                            <g>
                                <path d={s.path.clone()} fill={format!("url(#{})", gradient_id(s.palette))}
                                    stroke="rgba(255,255,255,0.2)" stroke-width="3" stroke-linejoin="round"
                                    style={style} onmouseenter={on_enter} onmouseleave={on_leave} />
                                <path d={s.path.clone()} fill="url(#gloss)" pointer-events="none" />
                            </g>
                        }
                    }) }
                </svg>

                if let Some(slice) = hovered.and_then(|i| slices.get(i)) {
                    <div class="absolute bg-gray-900 text-white px-4 py-3 rounded-xl shadow-2xl text-sm pointer-events-none border border-gray-700 whitespace-nowrap"
                        style={format!("left: {:.0}px; top: {:.0}px; transform: translate(-50%, -120%);", slice.mid_point.0, slice.mid_point.1)}>
                        <div class="font-bold text-base mb-1">{ &slice.label }</div>
                        <div class="text-yellow-300 font-semibold text-lg">{ format_currency(slice.total) }</div>
                    </div>
                }
            </div>

            <ul class="space-y-2 text-sm">
                { for slices.iter().map(|s| html! {
                    <li class="flex items-center gap-3">
                        <span class="w-3 h-3 rounded-full" style={format!("background: {};", PIE_PALETTE[s.palette][0])}></span>
                        <span class="text-gray-300 flex-1">{ &s.label }</span>
                        <span class="text-white font-medium">{ format_currency(s.total) }</span>
                        <span class="text-gray-500 w-12 text-right">{ format!("{:.0}%", s.fraction * 100.0) }</span>
                    </li>
                }) }
            </ul>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BudgetDonutProps {
    pub income: f64,
    pub savings: f64,
    pub expenses: f64,
}

#[function_component(BudgetDonut)]
pub fn budget_donut(props: &BudgetDonutProps) -> Html {
    let arcs = donut_arcs(props.income, props.savings, props.expenses);
    let dash = |length: f64| format!("{length:.2} {DONUT_CIRCUMFERENCE}");

    html! {
        <div class="relative w-48 h-48 mx-auto">
            <svg viewBox="0 0 100 100" class="w-full h-full transform -rotate-90">
                <circle cx="50" cy="50" r="40" fill="none" stroke="#E5E7EB" stroke-width="12" />
                <circle cx="50" cy="50" r="40" fill="none" stroke={SAVINGS_ARC_COLOR} stroke-width="12"
                    stroke-dasharray={dash(arcs.savings_dash)} stroke-dashoffset="0" />
                <circle cx="50" cy="50" r="40" fill="none" stroke={EXPENSES_ARC_COLOR} stroke-width="12"
                    stroke-dasharray={dash(arcs.expenses_dash)} stroke-dashoffset={format!("{:.2}", arcs.expenses_offset)} />
            </svg>
            <div class="absolute inset-0 flex flex-col items-center justify-center">
                <span class="text-xs text-gray-400">{"Income"}</span>
                <span class="text-lg font-bold text-white">{ format_currency(props.income) }</span>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct OverviewChartProps {
    pub bars: Vec<MonthBar>,
    pub totals: OverviewTotals,
}

/// Stacked income / expenses / scheduled bars, one per month.
#[function_component(OverviewChart)]
pub fn overview_chart(props: &OverviewChartProps) -> Html {
    let stacks = stack_heights(&props.bars, &props.totals, OVERVIEW_CHART_HEIGHT);
    let segment = |height: f64, color: &str, rounded: bool| {
        if height > 0.0 {
            html! {
                <div class={classes!("w-full", rounded.then_some("rounded-t"))}
                    style={format!("height: {height:.1}px; background-color: {color};")}></div>
            }
        } else {
            html! {}
        }
    };

    html! {
        <div class="mt-2">
            <div class="flex items-end justify-between" style={format!("height: {}px;", OVERVIEW_CHART_HEIGHT + 30.0)}>
                { for props.bars.iter().zip(stacks.iter()).map(|(bar, stack)| html! {
                    <div key={bar.month.clone()} class="flex flex-col items-center flex-1 mx-0.5">
                        <div class="relative w-full" style={format!("height: {OVERVIEW_CHART_HEIGHT}px;")}>
                            if bar.has_data {
                                <div class="absolute bottom-0 w-full flex flex-col-reverse">
                                    { segment(stack.income, INCOME_COLOR, true) }
                                    { segment(stack.expenses, EXPENSES_COLOR, false) }
                                    { segment(stack.scheduled, SCHEDULED_COLOR, true) }
                                </div>
                            } else {
                                <div class="absolute bottom-0 w-full bg-[#1a1a1a]" style="height: 2px;"></div>
                            }
                        </div>
                        <span class={classes!("text-xs", "mt-2", if bar.has_data { "text-gray-400" } else { "text-gray-600" })}>
                            { bar.label }
                        </span>
                    </div>
                }) }
            </div>
            <div class="flex gap-4 mt-4 text-xs text-gray-400">
                { legend_dot(INCOME_COLOR, "Income") }
                { legend_dot(EXPENSES_COLOR, "Expenses") }
                { legend_dot(SCHEDULED_COLOR, "Scheduled") }
            </div>
        </div>
    }
}

fn legend_dot(color: &str, label: &'static str) -> Html {
    html! {
        <span class="flex items-center gap-2">
            <span class="w-3 h-3 rounded-full" style={format!("background-color: {color};")}></span>
            { label }
        </span>
    }
}
