//! Payout configuration.

/// Payout rules.
///
/// The defaults are the standard table: naturals pay 3:2, surrender returns
/// half the wager, Perfect Pairs pays 5x and Lucky Lucky qualifies on a
/// combined 19 to 21.
///
/// ```
/// use bjcore::RuleOptions;
///
/// let options = RuleOptions::default()
///     .with_blackjack_pays(1.2)
///     .with_perfect_pairs_pays(6.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RuleOptions {
    /// Natural payout ratio (typically 1.5).
    pub blackjack_pays: f64,
    /// Fraction of the wager returned on surrender.
    pub surrender_refund: f64,
    /// Perfect Pairs multiplier.
    pub perfect_pairs_pays: f64,
    /// Lowest combined total qualifying for Lucky Lucky.
    pub lucky_lucky_min: u8,
    /// Highest combined total qualifying for Lucky Lucky.
    pub lucky_lucky_max: u8,
}

impl Default for RuleOptions {
    fn default() -> Self {
        Self {
            blackjack_pays: 1.5,
            surrender_refund: 0.5,
            perfect_pairs_pays: 5.0,
            lucky_lucky_min: 19,
            lucky_lucky_max: 21,
        }
    }
}

impl RuleOptions {
    /// Sets the natural payout ratio.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::RuleOptions;
    ///
    /// let options = RuleOptions::default().with_blackjack_pays(1.2);
    /// assert_eq!(options.blackjack_pays, 1.2);
    /// ```
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: f64) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets the fraction of the wager returned on surrender.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::RuleOptions;
    ///
    /// let options = RuleOptions::default().with_surrender_refund(0.4);
    /// assert_eq!(options.surrender_refund, 0.4);
    /// ```
    #[must_use]
    pub const fn with_surrender_refund(mut self, fraction: f64) -> Self {
        self.surrender_refund = fraction;
        self
    }

    /// Sets the Perfect Pairs multiplier.
    #[must_use]
    pub const fn with_perfect_pairs_pays(mut self, multiplier: f64) -> Self {
        self.perfect_pairs_pays = multiplier;
        self
    }

    /// Sets the combined totals qualifying for Lucky Lucky.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::RuleOptions;
    ///
    /// let options = RuleOptions::default().with_lucky_lucky_range(20, 21);
    /// assert_eq!((options.lucky_lucky_min, options.lucky_lucky_max), (20, 21));
    /// ```
    #[must_use]
    pub const fn with_lucky_lucky_range(mut self, min: u8, max: u8) -> Self {
        self.lucky_lucky_min = min;
        self.lucky_lucky_max = max;
        self
    }

    pub(crate) fn is_lucky_lucky_total(&self, total: u16) -> bool {
        (u16::from(self.lucky_lucky_min)..=u16::from(self.lucky_lucky_max)).contains(&total)
    }
}
