//! Агрегат истории раздачи.
//!
//! Каждая операция берёт текущую версию по ссылке и возвращает новую,
//! полностью пересчитанную (допустимые действия, суммы, цепочка банков).
//! Старая версия не меняется, поэтому её можно хранить для undo.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::{
    Card, CardParseError, CardSlot, Chips, GameVariant, Position, Rank, Stakes, Suit,
};
use crate::engine::actions::{Action, ActionKind};
use crate::engine::betting::{self, Round, RoundRules};
use crate::engine::card_pool::{CardPool, CardSlotRef};
use crate::engine::errors::EngineError;
use crate::engine::positions::{active_after, active_positions, post_flop_order};
use crate::engine::pot::recompute_pots;

/// Размер стола в новой раздаче.
pub const DEFAULT_TABLE_SIZE: u8 = 6;

/// Рука оппонента, показанная на вскрытии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct VillainHand {
    /// None – позиция сброшена сменой размера стола.
    pub position: Option<Position>,
    pub cards: Vec<CardSlot>,
}

/// Полная запись раздачи – единственный источник правды для UI.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandRecord {
    pub variant: GameVariant,
    pub stakes: Stakes,
    pub table_size: u8,
    pub hero_position: Option<Position>,
    pub hero_hand: Vec<CardSlot>,
    pub rounds: Vec<Round>,
    pub villains: Vec<VillainHand>,
}

impl HandRecord {
    /// Новая раздача: нулевые ставки, 6 мест, в первом раунде по пустой строке на место.
    pub fn new(variant: GameVariant) -> Self {
        let family = variant.family;
        let rounds = (0..family.round_count())
            .map(|i| Round::new(family.round_name(i), family.board_slots(i), family.is_draw_round(i)))
            .collect();

        let mut record = Self {
            stakes: Stakes {
                ante_type: variant.ante_type,
                ..Stakes::default()
            },
            table_size: DEFAULT_TABLE_SIZE,
            hero_position: None,
            hero_hand: vec![CardSlot::UNSET; variant.hand_size],
            rounds,
            villains: Vec::new(),
            variant,
        };
        record.reseed_seats();
        record.recompute();
        record
    }

    // ---------------------------------------------------------------------
    // Чтение
    // ---------------------------------------------------------------------

    /// Активные места стола в порядке префлопа.
    pub fn seats(&self) -> Vec<Position> {
        active_positions(self.table_size).unwrap_or_default()
    }

    /// Порядок, в котором места добавляются в раунд.
    pub fn acting_order(&self, round: usize) -> Vec<Position> {
        let order = if round == 0 {
            active_positions(self.table_size)
        } else {
            post_flop_order(self.table_size)
        };
        order.unwrap_or_default()
    }

    pub fn all_actions(&self) -> impl Iterator<Item = &Action> {
        self.rounds.iter().flat_map(|r| r.actions.iter())
    }

    /// Кто ещё в раздаче по всем записанным действиям.
    pub fn live_positions(&self) -> BTreeSet<Position> {
        active_after(self.all_actions())
    }

    pub fn round(&self, index: usize) -> Result<&Round, EngineError> {
        self.rounds.get(index).ok_or(EngineError::RoundOutOfRange(index))
    }

    pub fn rules(&self, round: usize) -> RoundRules {
        RoundRules::for_round(self.variant.structure, &self.stakes, round)
    }

    /// Сколько нужно уравнять в последнем раунде, где уже есть строки.
    pub fn current_bet(&self) -> Chips {
        let Some(index) = self.rounds.iter().rposition(|r| !r.actions.is_empty()) else {
            return self.rules(0).opening_bet;
        };
        let round = &self.rounds[index];
        if round.bet_raise_count > 0 {
            round.current_bet
        } else {
            self.rules(index).opening_bet
        }
    }

    /// Итоговый банк (последний раунд цепочки).
    pub fn total_pot(&self) -> Chips {
        self.rounds.last().map(|r| r.pot).unwrap_or(Chips::ZERO)
    }

    pub fn card_pool(&self) -> CardPool {
        CardPool::collect(self)
    }

    pub fn card(&self, slot: CardSlotRef) -> Result<CardSlot, EngineError> {
        let card = match slot {
            CardSlotRef::Hero(i) => self.hero_hand.get(i),
            CardSlotRef::Board { round, index } => self.rounds.get(round).and_then(|r| r.board.get(index)),
            CardSlotRef::Drawn { round, index } => self
                .rounds
                .get(round)
                .and_then(|r| r.draw.as_ref())
                .and_then(|d| d.drawn.get(index)),
            CardSlotRef::Villain { hand, index } => self.villains.get(hand).and_then(|v| v.cards.get(index)),
        };
        card.copied().ok_or(EngineError::CardSlotOutOfRange(slot))
    }

    /// Места, которые можно назначить владельцем руки оппонента:
    /// живые, не герой и не занятые другими оппонентами.
    pub fn offerable_villain_positions(&self, editing: Option<usize>) -> Vec<Position> {
        let live = self.live_positions();
        let taken: Vec<Position> = self
            .villains
            .iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != editing)
            .filter_map(|(_, v)| v.position)
            .collect();

        self.seats()
            .into_iter()
            .filter(|p| live.contains(p))
            .filter(|p| Some(*p) != self.hero_position)
            .filter(|p| !taken.contains(p))
            .collect()
    }

    // ---------------------------------------------------------------------
    // Ставки и стол
    // ---------------------------------------------------------------------

    /// Новые ставки. Если у варианта есть правило анте, анте выводится из BB.
    pub fn with_stakes(&self, stakes: Stakes) -> Self {
        let mut next = self.clone();
        next.stakes = stakes;
        if let Some(ante) = next.variant.ante_rule.derive(stakes.big_blind) {
            next.stakes.ante = ante;
        }
        next.recompute();
        log::debug!("stakes updated: {:?}", next.stakes);
        next
    }

    /// Ввод малого блайнда: BB = 2 × SB.
    pub fn with_small_blind(&self, small_blind: Chips) -> Self {
        self.with_stakes(self.stakes.from_small_blind(small_blind))
    }

    pub fn with_ante_equal_to_big_blind(&self) -> Self {
        let mut next = self.clone();
        next.stakes.ante = next.stakes.big_blind;
        next.recompute();
        log::debug!("ante set to big blind: {}", next.stakes.ante);
        next
    }

    /// Смена размера стола: первый раунд пересеивается пустыми строками,
    /// строки остальных раундов сбрасываются, позиции вне стола снимаются.
    pub fn with_table_size(&self, table_size: u8) -> Result<Self, EngineError> {
        active_positions(table_size)?;

        let mut next = self.clone();
        next.table_size = table_size;
        next.reseed_seats();
        next.recompute();
        log::debug!("table size set to {table_size}");
        Ok(next)
    }

    pub fn with_hero_position(&self, position: Position) -> Result<Self, EngineError> {
        if !self.seats().contains(&position) {
            return Err(EngineError::PositionNotActive(position));
        }
        if self.villains.iter().any(|v| v.position == Some(position)) {
            return Err(EngineError::PositionHeldByVillain(position));
        }
        let mut next = self.clone();
        next.hero_position = Some(position);
        log::debug!("hero position set to {position}");
        Ok(next)
    }

    // ---------------------------------------------------------------------
    // Карты
    // ---------------------------------------------------------------------

    /// Записать карту в слот. Полностью заданная карта, уже занятая другим
    /// слотом, отклоняется: слот остаётся как был.
    pub fn with_card(&self, slot: CardSlotRef, card: CardSlot) -> Result<Self, EngineError> {
        self.card(slot)?;
        if let Some(c) = card.card() {
            if !self.card_pool().is_available(c.suit, c.rank, Some(slot)) {
                log::debug!("card {c} refused for {slot:?}: already used");
                return Err(EngineError::DuplicateCard(c));
            }
        }

        let mut next = self.clone();
        *next.card_mut(slot)? = card;
        log::debug!("card slot {slot:?} set to {card:?}");
        Ok(next)
    }

    pub fn with_card_suit(&self, slot: CardSlotRef, suit: Option<Suit>) -> Result<Self, EngineError> {
        let current = self.card(slot)?;
        self.with_card(slot, CardSlot { suit, ..current })
    }

    pub fn with_card_rank(&self, slot: CardSlotRef, rank: Option<Rank>) -> Result<Self, EngineError> {
        let current = self.card(slot)?;
        self.with_card(slot, CardSlot { rank, ..current })
    }

    /// Ввод карты текстом ("As", "kh"). Пустая строка очищает слот.
    /// Битая запись тоже очищает слот, а ошибка разбора возвращается как подсказка.
    pub fn with_card_text(
        &self,
        slot: CardSlotRef,
        text: &str,
    ) -> Result<(Self, Option<CardParseError>), EngineError> {
        if text.trim().is_empty() {
            return Ok((self.with_card(slot, CardSlot::UNSET)?, None));
        }
        match text.parse::<Card>() {
            Ok(card) => Ok((self.with_card(slot, CardSlot::of(card))?, None)),
            Err(err) => Ok((self.with_card(slot, CardSlot::UNSET)?, Some(err))),
        }
    }

    // ---------------------------------------------------------------------
    // Действия
    // ---------------------------------------------------------------------

    /// Добавить следующий круг: по строке на каждое живое место.
    pub fn with_next_orbit(&self, round: usize) -> Result<Self, EngineError> {
        self.round(round)?;

        let order = self.acting_order(round);
        let live = self.live_positions();
        let nobody_acted = self.all_actions().next().is_none();

        let mut next = self.clone();
        let added = betting::append_orbit(&mut next.rounds[round], &order, |p| {
            nobody_acted || live.contains(&p)
        });
        next.recompute();
        log::debug!("round {round}: appended {added} actors");
        Ok(next)
    }

    pub fn with_action(&self, round: usize, index: usize, kind: ActionKind) -> Result<Self, EngineError> {
        let mut next = self.clone();
        let target = next.rounds.get_mut(round).ok_or(EngineError::RoundOutOfRange(round))?;
        betting::set_action_kind(target, round, index, kind)?;
        next.recompute();
        log::debug!("round {round}: action {index} set to {kind}");
        Ok(next)
    }

    /// Ручной ввод суммы Bet/Raise (не фикс-лимит).
    pub fn with_amount(&self, round: usize, index: usize, amount: Chips) -> Result<Self, EngineError> {
        let mut next = self.clone();
        let structure = next.variant.structure;
        let target = next.rounds.get_mut(round).ok_or(EngineError::RoundOutOfRange(round))?;
        betting::set_wager(target, round, index, amount, structure)?;
        next.recompute();
        log::debug!("round {round}: action {index} amount {amount}");
        Ok(next)
    }

    /// Удалить строку. Пересчитываются и допустимые действия, и банки.
    pub fn without_action(&self, round: usize, index: usize) -> Result<Self, EngineError> {
        let mut next = self.clone();
        let target = next.rounds.get_mut(round).ok_or(EngineError::RoundOutOfRange(round))?;
        let removed = betting::remove_action(target, round, index)?;
        next.recompute();
        log::debug!("round {round}: removed action {index} ({})", removed.position);
        Ok(next)
    }

    // ---------------------------------------------------------------------
    // Оппоненты
    // ---------------------------------------------------------------------

    /// Добавить руку оппонента на первое доступное место.
    pub fn with_villain(&self) -> Result<Self, EngineError> {
        let position = self
            .offerable_villain_positions(None)
            .first()
            .copied()
            .ok_or(EngineError::NoVillainPositionAvailable)?;

        let mut next = self.clone();
        next.villains.push(VillainHand {
            position: Some(position),
            cards: vec![CardSlot::UNSET; self.variant.hand_size],
        });
        log::debug!("villain hand added at {position}");
        Ok(next)
    }

    pub fn with_villain_position(&self, villain: usize, position: Position) -> Result<Self, EngineError> {
        if villain >= self.villains.len() {
            return Err(EngineError::VillainOutOfRange(villain));
        }
        if !self.offerable_villain_positions(Some(villain)).contains(&position) {
            return Err(EngineError::VillainPositionUnavailable(position));
        }
        let mut next = self.clone();
        next.villains[villain].position = Some(position);
        log::debug!("villain {villain} moved to {position}");
        Ok(next)
    }

    // ---------------------------------------------------------------------
    // Обмен карт (дро-игры)
    // ---------------------------------------------------------------------

    /// Отметить/снять сброс карты героя в раунде обмена.
    pub fn with_discard(&self, round: usize, hero_card: usize, discarded: bool) -> Result<Self, EngineError> {
        if hero_card >= self.hero_hand.len() {
            return Err(EngineError::CardSlotOutOfRange(CardSlotRef::Hero(hero_card)));
        }
        let mut next = self.clone();
        let draw = next.draw_mut(round)?;
        if discarded {
            if !draw.discards.contains(&hero_card) {
                draw.discards.push(hero_card);
            }
        } else {
            draw.discards.retain(|&i| i != hero_card);
        }
        log::debug!("round {round}: hero card {hero_card} discarded = {discarded}");
        Ok(next)
    }

    /// Добавить пустой слот под пришедшую карту.
    pub fn with_drawn_slot(&self, round: usize) -> Result<Self, EngineError> {
        let mut next = self.clone();
        next.draw_mut(round)?.drawn.push(CardSlot::UNSET);
        log::debug!("round {round}: drawn card slot added");
        Ok(next)
    }

    pub fn with_exchange_count(&self, round: usize, position: Position, count: u8) -> Result<Self, EngineError> {
        if !self.seats().contains(&position) {
            return Err(EngineError::PositionNotActive(position));
        }
        // Поменять можно не больше карт, чем на руках.
        let hand_size = self.variant.hand_size;
        if usize::from(count) > hand_size {
            return Err(EngineError::ExchangeCountTooLarge { count, hand_size });
        }
        let mut next = self.clone();
        next.draw_mut(round)?.exchanges.insert(position, count);
        log::debug!("round {round}: {position} exchanged {count}");
        Ok(next)
    }

    // ---------------------------------------------------------------------
    // Внутреннее
    // ---------------------------------------------------------------------

    fn draw_mut(&mut self, round: usize) -> Result<&mut betting::DrawExchange, EngineError> {
        self.rounds
            .get_mut(round)
            .ok_or(EngineError::RoundOutOfRange(round))?
            .draw
            .as_mut()
            .ok_or(EngineError::NotADrawRound(round))
    }

    fn card_mut(&mut self, slot: CardSlotRef) -> Result<&mut CardSlot, EngineError> {
        let card = match slot {
            CardSlotRef::Hero(i) => self.hero_hand.get_mut(i),
            CardSlotRef::Board { round, index } => {
                self.rounds.get_mut(round).and_then(|r| r.board.get_mut(index))
            }
            CardSlotRef::Drawn { round, index } => self
                .rounds
                .get_mut(round)
                .and_then(|r| r.draw.as_mut())
                .and_then(|d| d.drawn.get_mut(index)),
            CardSlotRef::Villain { hand, index } => {
                self.villains.get_mut(hand).and_then(|v| v.cards.get_mut(index))
            }
        };
        card.ok_or(EngineError::CardSlotOutOfRange(slot))
    }

    /// Пересеять места под текущий размер стола.
    fn reseed_seats(&mut self) {
        let seats = self.seats();

        for (i, round) in self.rounds.iter_mut().enumerate() {
            round.actions = if i == 0 {
                seats.iter().copied().map(Action::blank).collect()
            } else {
                Vec::new()
            };
            if let Some(draw) = round.draw.as_mut() {
                draw.exchanges = seats.iter().map(|&p| (p, 0)).collect();
            }
        }

        if self.hero_position.is_some_and(|p| !seats.contains(&p)) {
            self.hero_position = None;
        }
        for villain in &mut self.villains {
            if villain.position.is_some_and(|p| !seats.contains(&p)) {
                villain.position = None;
            }
        }
    }

    /// Полный пересчёт: каждый раунд целиком, затем цепочка банков.
    fn recompute(&mut self) {
        for i in 0..self.rounds.len() {
            let rules = self.rules(i);
            betting::recompute_round(&mut self.rounds[i], &rules);
        }
        recompute_pots(&mut self.rounds, &self.stakes, self.table_size);
    }
}
