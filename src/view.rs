// SPDX-License-Identifier: MIT OR Apache-2.0

#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, string::String};
use core::fmt;

use crate::{
    compute_fold, ClickAction, Color, Fold, FoldConfig, FoldEvent, FoldResult, FoldState,
    LayoutOracle, LineMetrics, Padding, Search, StyledText, Transition,
};

/// Notified when a fold finishes opening or closing
pub trait OpenCloseCallback {
    fn on_open(&mut self);

    fn on_close(&mut self);
}

/// Turns raw host text into styled text, `None` falls back to plain text
pub type TextHandler = Box<dyn Fn(&str) -> Option<StyledText>>;

/// Glue between a host view and the fold engine
///
/// The host forwards size changes, clicks and animation completion; the view
/// recomputes the fold when text, width, or layout settings change and tells
/// the host which content and height to present.
pub struct FoldView<O> {
    oracle: O,
    config: FoldConfig,
    raw: Option<String>,
    text: StyledText,
    handler: Option<TextHandler>,
    /// View width of the last computation, including horizontal padding
    width_opt: Option<f32>,
    fold: Fold,
    on_click: Option<Box<dyn FnMut()>>,
    on_link_click: Option<Box<dyn FnMut(usize)>>,
    callback: Option<Box<dyn OpenCloseCallback>>,
}

impl<O: LayoutOracle> FoldView<O> {
    /// Create a view with the default [`FoldConfig`]
    pub fn new(oracle: O) -> Self {
        Self::with_config(oracle, FoldConfig::default())
    }

    pub fn with_config(oracle: O, config: FoldConfig) -> Self {
        let text = StyledText::default();
        let fold = Fold::new(FoldResult::unfolded(
            &text,
            LineMetrics::default(),
            config.padding.vertical(),
        ));
        Self {
            oracle,
            config,
            raw: None,
            text,
            handler: None,
            width_opt: None,
            fold,
            on_click: None,
            on_link_click: None,
            callback: None,
        }
    }

    /// Set raw text, passing it through the text handler if there is one
    pub fn set_text(&mut self, text: &str) {
        self.raw = Some(String::from(text));
        self.text = self.preprocess(text);
        self.relayout();
    }

    /// Set already styled text, bypassing the text handler
    pub fn set_styled_text(&mut self, text: StyledText) {
        self.raw = None;
        self.text = text;
        self.relayout();
    }

    /// Set the handler that styles raw text, reapplying it to the current text
    pub fn set_text_handler<F>(&mut self, handler: F)
    where
        F: Fn(&str) -> Option<StyledText> + 'static,
    {
        self.handler = Some(Box::new(handler));
        if let Some(raw) = self.raw.take() {
            self.text = self.preprocess(&raw);
            self.raw = Some(raw);
            self.relayout();
        }
    }

    fn preprocess(&self, raw: &str) -> StyledText {
        self.handler
            .as_ref()
            .and_then(|handler| handler(raw))
            .unwrap_or_else(|| StyledText::new(raw))
    }

    /// Notify the view of its width, returns true if the fold was recomputed
    ///
    /// A width equal to the last computed one is ignored.
    pub fn set_size(&mut self, width: f32) -> bool {
        if self.width_opt.map(f32::to_bits) == Some(width.to_bits()) {
            return false;
        }
        self.width_opt = Some(width);
        self.relayout();
        true
    }

    /// View width of the last computation
    pub fn width(&self) -> Option<f32> {
        self.width_opt
    }

    /// Recompute the fold for the current text, width, and config
    pub fn relayout(&mut self) {
        let result = match self.width_opt {
            Some(width) => {
                let content_width = width - self.config.padding.horizontal();
                log::debug!(
                    "folding {} bytes at width {} into {} lines",
                    self.text.len(),
                    content_width,
                    self.config.max_lines
                );
                let result =
                    compute_fold(&mut self.oracle, &self.text, content_width, &self.config);
                self.oracle.finish_pass();
                result
            }
            None => FoldResult::unfolded(
                &self.text,
                LineMetrics::default(),
                self.config.padding.vertical(),
            ),
        };
        self.fold.reset(result);
    }

    /// Replace the config, recomputing if layout is affected
    pub fn set_config(&mut self, config: FoldConfig) {
        let relayout = self.config.layout_differs(&config);
        self.config = config;
        if relayout {
            self.relayout();
        }
    }

    fn update_config<F: FnOnce(&mut FoldConfig)>(&mut self, f: F) {
        let mut config = self.config.clone();
        f(&mut config);
        self.set_config(config);
    }

    /// Lines shown while closed, 0 disables folding
    pub fn set_max_lines(&mut self, max_lines: usize) {
        self.update_config(|config| config.max_lines = max_lines);
    }

    /// The exposed maximum line count property
    pub fn max_lines(&self) -> usize {
        self.config.max_lines
    }

    pub fn set_open_suffix(&mut self, text: &str, color: Color) {
        self.update_config(|config| {
            config.open_suffix = text.into();
            config.open_suffix_color = color;
        });
    }

    pub fn set_close_suffix(&mut self, text: &str, color: Color) {
        self.update_config(|config| {
            config.close_suffix = text.into();
            config.close_suffix_color = color;
        });
    }

    pub fn set_close_in_new_line(&mut self, close_in_new_line: bool) {
        self.update_config(|config| config.close_in_new_line = close_in_new_line);
    }

    pub fn set_close_align_right(&mut self, close_align_right: bool) {
        self.update_config(|config| config.close_align_right = close_align_right);
    }

    pub fn set_padding(&mut self, padding: Padding) {
        self.update_config(|config| config.padding = padding);
    }

    pub fn set_search(&mut self, search: Search) {
        self.update_config(|config| config.search = search);
    }

    pub fn set_has_animation(&mut self, animated: bool) {
        self.config.animated = animated;
    }

    pub fn set_click_toggle_state(&mut self, click_toggles: bool) {
        self.config.click_toggles = click_toggles;
    }

    pub fn set_on_click_listener<F: FnMut() + 'static>(&mut self, on_click: F) {
        self.on_click = Some(Box::new(on_click));
    }

    /// Receive clicks on [`ClickAction::Link`] spans
    pub fn set_on_link_click<F: FnMut(usize) + 'static>(&mut self, on_link_click: F) {
        self.on_link_click = Some(Box::new(on_link_click));
    }

    pub fn set_open_close_callback<C: OpenCloseCallback + 'static>(&mut self, callback: C) {
        self.callback = Some(Box::new(callback));
    }

    pub fn open(&mut self) -> Option<Transition> {
        let transition = self.fold.open(self.config.animated);
        self.dispatch(transition)
    }

    pub fn close(&mut self) -> Option<Transition> {
        let transition = self.fold.close(self.config.animated);
        self.dispatch(transition)
    }

    pub fn toggle_state(&mut self) -> Option<Transition> {
        let transition = self.fold.toggle(self.config.animated);
        self.dispatch(transition)
    }

    /// The host finished animating the last transition
    pub fn finish_transition(&mut self) {
        if let Some(event) = self.fold.finish_transition() {
            self.notify(event);
        }
    }

    /// A click on the view, at byte `index` of [`Self::content`] if it hit text
    ///
    /// A click on an affordance toggles, a click elsewhere toggles if
    /// [`FoldConfig::click_toggles`] is set. The click listener is called after
    /// either.
    pub fn click(&mut self, index: Option<usize>) -> Option<Transition> {
        let action = index.and_then(|index| self.fold.content().click_action_at(index));
        let transition = match action {
            Some(ClickAction::Toggle) => self.toggle_state(),
            Some(ClickAction::Link(id)) => {
                if let Some(on_link_click) = &mut self.on_link_click {
                    on_link_click(id);
                }
                None
            }
            None if self.config.click_toggles => self.toggle_state(),
            None => None,
        };
        if let Some(on_click) = &mut self.on_click {
            on_click();
        }
        transition
    }

    fn dispatch(&mut self, transition: Option<Transition>) -> Option<Transition> {
        if let Some(event) = transition.and_then(|transition| transition.event) {
            self.notify(event);
        }
        transition
    }

    fn notify(&mut self, event: FoldEvent) {
        log::debug!("fold {:?}", event);
        if let Some(callback) = &mut self.callback {
            match event {
                FoldEvent::Opened => callback.on_open(),
                FoldEvent::Closed => callback.on_close(),
            }
        }
    }

    /// Content to display
    pub fn content(&self) -> &StyledText {
        self.fold.content()
    }

    /// Height to display, including vertical padding
    pub fn height(&self) -> f32 {
        self.fold.height()
    }

    /// Line limit to apply while displaying [`Self::content`], `None` for unlimited
    pub fn visible_max_lines(&self) -> Option<usize> {
        self.fold.visible_max_lines(self.config.max_lines)
    }

    pub fn state(&self) -> Option<FoldState> {
        self.fold.state()
    }

    pub fn fold(&self) -> &Fold {
        &self.fold
    }

    pub fn config(&self) -> &FoldConfig {
        &self.config
    }

    /// Styled text being folded
    pub fn text(&self) -> &StyledText {
        &self.text
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Get the oracle mutably, call [`Self::relayout`] if its answers changed
    pub fn oracle_mut(&mut self) -> &mut O {
        &mut self.oracle
    }
}

impl<O: fmt::Debug> fmt::Debug for FoldView<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FoldView")
            .field("oracle", &self.oracle)
            .field("config", &self.config)
            .field("text", &self.text)
            .field("width_opt", &self.width_opt)
            .field("fold", &self.fold)
            .finish_non_exhaustive()
    }
}
