//! Render model
//!
//! [`Carousel::view`] flattens the carousel state into plain props a
//! renderer can draw without knowing the engine:
//!
//! ```text
//! CarouselView
//! ├── header   title, subtitle, header button, header nav buttons
//! ├── body     list transform, items, body nav buttons
//! └── footer   footer nav buttons, indicators | scrollbar, autoplay toggle
//! ```

use bds_core::{
    ButtonCircularProps, ButtonCircularSize, ButtonCircularVariant, ButtonProps, ButtonSize,
    ButtonVariant, Clock,
};
use serde::Serialize;
use smallvec::SmallVec;

use crate::carousel::Carousel;
use crate::config::{NavButtonPlacement, PaginationType};
use crate::constants::GAP_WIDTH;
use crate::focus::item_tab_index;
use crate::navigation::Direction;
use crate::pagination::{indicator_views, IndicatorView};

/// Everything needed to draw one carousel
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CarouselView {
    pub id: String,
    pub is_full_width: bool,
    /// Effective autoplay (configured and paired with indicators)
    pub has_autoplay: bool,
    pub is_dragging: bool,
    pub gap: f32,
    pub autoplay_interval_ms: u64,
    pub header: Option<HeaderView>,
    pub body: BodyView,
    pub footer: FooterView,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HeaderView {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub button: Option<ButtonProps>,
    pub nav_buttons: SmallVec<[NavButtonView; 2]>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NavButtonView {
    pub direction: Direction,
    pub props: ButtonCircularProps,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BodyView {
    pub list_id: String,
    /// `translateX` of the list in px
    pub translate_x: f32,
    /// Cross-fade instead of sliding
    pub uses_fading_transition: bool,
    pub items: Vec<ItemView>,
    pub nav_buttons: SmallVec<[NavButtonView; 2]>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ItemView {
    pub id: String,
    pub index: usize,
    pub left: f32,
    pub width: f32,
    pub height: f32,
    pub tab_index: i32,
    /// Shown by the fading transition
    pub is_in: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FooterView {
    pub prev_button: Option<ButtonCircularProps>,
    pub next_button: Option<ButtonCircularProps>,
    pub pagination: Option<PaginationView>,
    pub autoplay_button: Option<ButtonCircularProps>,
    pub is_autoplaying: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum PaginationView {
    Indicators {
        label: String,
        indicators: Vec<IndicatorView>,
    },
    Scrollbar(ScrollbarView),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScrollbarView {
    /// `aria-controls`
    pub controls: String,
    pub value_now: u32,
    pub value_min: u32,
    pub value_max: u32,
    pub thumb_width: f32,
    pub thumb_left: f32,
    pub is_dragging: bool,
}

impl<C: Clock + Clone> Carousel<C> {
    /// Render model, `None` when there is nothing to render
    pub fn view(&self) -> Option<CarouselView> {
        if self.total_items() == 0 {
            return None;
        }
        let config = self.config();

        Some(CarouselView {
            id: config.id.clone(),
            is_full_width: config.is_full_width,
            has_autoplay: config.has_effective_autoplay(),
            is_dragging: self.is_dragging(),
            gap: GAP_WIDTH,
            autoplay_interval_ms: config.autoplay_interval_ms,
            header: self.header_view(),
            body: self.body_view(),
            footer: self.footer_view(),
        })
    }

    fn header_view(&self) -> Option<HeaderView> {
        let config = self.config();
        let nav_buttons: SmallVec<[NavButtonView; 2]> =
            if config.nav_button_placement == NavButtonPlacement::Header {
                [Direction::Prev, Direction::Next]
                    .into_iter()
                    .map(|direction| NavButtonView {
                        direction,
                        props: self
                            .nav_button(
                                direction,
                                ButtonCircularVariant::Contained,
                                ButtonCircularSize::Medium,
                            )
                            .disabled(!self.is_nav_button_shown(direction)),
                    })
                    .collect()
            } else {
                SmallVec::new()
            };

        let button = config.header_button_label.as_ref().map(|label| {
            ButtonProps::new(label.clone())
                .variant(ButtonVariant::Text)
                .size(ButtonSize::Small)
                .remove_side_spacing(true)
        });

        if config.title.is_none()
            && config.subtitle.is_none()
            && button.is_none()
            && nav_buttons.is_empty()
        {
            return None;
        }
        Some(HeaderView {
            title: config.title.clone(),
            subtitle: config.subtitle.clone(),
            button,
            nav_buttons,
        })
    }

    fn body_view(&self) -> BodyView {
        let config = self.config();
        let target_index = self.target_index();
        let uses_fading_transition = config.is_full_width && config.has_effective_autoplay();

        let items = self
            .item_coordinates()
            .iter()
            .enumerate()
            .map(|(index, item)| ItemView {
                id: item.id.clone(),
                index,
                left: item.left,
                width: item.width(),
                height: config.item_height,
                tab_index: item_tab_index(index, target_index),
                is_in: !uses_fading_transition || index == target_index,
            })
            .collect();

        let (variant, size) = match config.nav_button_placement {
            NavButtonPlacement::BodyPrimary => {
                (ButtonCircularVariant::Primary, ButtonCircularSize::Large)
            }
            _ => (ButtonCircularVariant::Contained, ButtonCircularSize::Medium),
        };
        let nav_buttons = match config.nav_button_placement {
            NavButtonPlacement::Body | NavButtonPlacement::BodyPrimary => {
                [Direction::Prev, Direction::Next]
                    .into_iter()
                    .filter(|direction| self.is_nav_button_shown(*direction))
                    .map(|direction| NavButtonView {
                        direction,
                        props: self.nav_button(direction, variant, size),
                    })
                    .collect()
            }
            _ => SmallVec::new(),
        };

        BodyView {
            list_id: config.list_id(),
            translate_x: self.translate_x(),
            uses_fading_transition,
            items,
            nav_buttons,
        }
    }

    fn footer_view(&self) -> FooterView {
        let config = self.config();
        let in_footer = config.nav_button_placement == NavButtonPlacement::Footer;
        let footer_button = |direction| {
            in_footer.then(|| {
                self.nav_button(direction, ButtonCircularVariant::Basic, ButtonCircularSize::Medium)
                    .disabled(!self.is_nav_button_shown(direction))
            })
        };

        let pagination = match config.pagination_type {
            PaginationType::Indicator => Some(PaginationView::Indicators {
                label: config.labels.pagination.clone(),
                indicators: indicator_views(
                    &config.labels.pagination_indicator,
                    self.current_page(),
                    self.total_pages(),
                    self.is_autoplay_paused(),
                ),
            }),
            PaginationType::Scrollbar => {
                let metrics = self.scrollbar_metrics();
                Some(PaginationView::Scrollbar(ScrollbarView {
                    controls: config.list_id(),
                    value_now: metrics.value_now,
                    value_min: 0,
                    value_max: 100,
                    thumb_width: metrics.thumb_width,
                    thumb_left: metrics.thumb_left,
                    is_dragging: self.is_scrollbar_dragging(),
                }))
            }
            PaginationType::None => None,
        };

        let autoplay_button = config.has_effective_autoplay().then(|| {
            let label = if self.is_autoplaying() {
                &config.labels.pause_button
            } else {
                &config.labels.resume_button
            };
            ButtonCircularProps::new(label.clone())
                .variant(ButtonCircularVariant::Contained)
                .size(ButtonCircularSize::Small)
                .controls(config.list_id())
        });

        FooterView {
            prev_button: footer_button(Direction::Prev),
            next_button: footer_button(Direction::Next),
            pagination,
            autoplay_button,
            is_autoplaying: self.is_autoplaying(),
        }
    }

    fn nav_button(
        &self,
        direction: Direction,
        variant: ButtonCircularVariant,
        size: ButtonCircularSize,
    ) -> ButtonCircularProps {
        let labels = &self.config().labels;
        let label = match direction {
            Direction::Prev => &labels.prev_button,
            Direction::Next => &labels.next_button,
        };
        ButtonCircularProps::new(label.clone())
            .variant(variant)
            .size(size)
            .controls(self.config().list_id())
    }

    fn is_nav_button_shown(&self, direction: Direction) -> bool {
        match direction {
            Direction::Prev => self.show_prev_button(),
            Direction::Next => self.show_next_button(),
        }
    }
}
