//! The broadcast policy table.
//!
//! Every outbound operation carries exactly one fan-out rule. The mapping
//! is a single exhaustive match in [`OutboundEvent::policy`] — adding a
//! variant without deciding its policy is a compile error, and the table
//! can be asserted on directly in tests instead of probing ~150 dispatch
//! bodies.
//!
//! The classification rule of thumb: anything describing world, creature,
//! or UI state a spectator could legitimately see broadcasts; private
//! dialogs, personal transactions, and one-client windows stay with the
//! owner; speech is broadcast unless privately directed; operations newer
//! protocol revisions added are gated on the owner's client capability.

use serde::{Deserialize, Serialize};

use crate::event::OutboundEvent;

/// Fan-out rule for one outbound operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BroadcastPolicy {
    /// Delivered to the owner and every attached viewer.
    Broadcast,
    /// Delivered to the owner only.
    OwnerOnly,
    /// Delivered to the owner always; to viewers unless the event's
    /// suppression predicate holds (see
    /// [`OutboundEvent::suppressed_for_viewers`]).
    ConditionalBroadcast,
    /// Delivered to the owner only, and only when the owner's client is
    /// not a legacy protocol revision; with a legacy owner the whole
    /// operation is a no-op.
    CapabilityGated,
}

impl BroadcastPolicy {
    /// Stable label for metrics and logging.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Broadcast => "broadcast",
            Self::OwnerOnly => "owner_only",
            Self::ConditionalBroadcast => "conditional_broadcast",
            Self::CapabilityGated => "capability_gated",
        }
    }
}

impl OutboundEvent {
    /// The fan-out rule for this event.
    pub fn policy(&self) -> BroadcastPolicy {
        use OutboundEvent as E;

        match self {
            // World, creature, tile, container, and inventory state a
            // spectator renders exactly like the owner does.
            E::Ping
            | E::PingBack
            | E::RawPayload { .. }
            | E::CreatureAppeared { .. }
            | E::CreatureMoved { .. }
            | E::CreatureTurned { .. }
            | E::CreatureOutfitChanged { .. }
            | E::CreatureLightChanged { .. }
            | E::CreatureSpeedChanged { .. }
            | E::CreatureHealthChanged { .. }
            | E::CreatureSkullChanged { .. }
            | E::CreatureShieldChanged { .. }
            | E::CreatureWalkthroughChanged { .. }
            | E::CreatureSquare { .. }
            | E::TileItemAdded { .. }
            | E::TileItemUpdated { .. }
            | E::TileThingRemoved { .. }
            | E::TileCreatureUpdated { .. }
            | E::TileRefreshed { .. }
            | E::WorldLightChanged { .. }
            | E::MagicEffect { .. }
            | E::DistanceEffect { .. }
            | E::ContainerOpened { .. }
            | E::ContainerClosed { .. }
            | E::ContainerItemAdded { .. }
            | E::ContainerItemUpdated { .. }
            | E::ContainerItemRemoved { .. }
            | E::InventoryItemChanged { .. }
            | E::InventoryImbuements { .. }
            | E::StatsChanged
            | E::SkillsChanged
            | E::StatusIconsChanged { .. }
            | E::UnjustifiedPoints { .. }
            | E::VipStatusChanged { .. }
            | E::VipEntryAdded { .. }
            | E::VipGroupsChanged
            | E::ChannelSpeech { .. }
            | E::ChannelMessage { .. }
            | E::TextMessage { .. }
            | E::TargetCancelled
            | E::WalkCancelled => BroadcastPolicy::Broadcast,

            // Map speech: public by default, withheld from viewers when
            // privately directed.
            E::CreatureSpeech { .. } => BroadcastPolicy::ConditionalBroadcast,

            // Operations newer protocol revisions added; a legacy owner
            // cannot receive them at all.
            E::SoundEffect { .. } | E::PairedSoundEffect { .. } | E::CreatureIcon { .. } => {
                BroadcastPolicy::CapabilityGated
            }

            // Everything below is a private dialog, a personal transaction,
            // or a window meant for exactly one client.

            // World resyncs the client requests for itself.
            E::MagicEffectRemoved { .. }
            | E::WorldTime { .. }
            | E::CreatureUpdated { .. }
            | E::CreatureReloaded { .. }
            | E::CreatureTypeChanged { .. }
            | E::CreatureEmblemChanged { .. }
            | E::CreatureHelpers { .. }

            // Personal storage and shortcuts.
            | E::InventoryIds
            | E::SpecialContainersAvailable
            | E::LootContainers
            | E::DepotItems { .. }
            | E::DepotSearchClosed
            | E::DepotSearchDetail { .. }
            | E::StashOpened

            // Personal character state.
            | E::BasicData
            | E::BlessStatus
            | E::RestingStatus { .. }
            | E::ExperienceTracker { .. }
            | E::ResourcesBalance { .. }
            | E::ResourceBalance { .. }
            | E::CoinBalance
            | E::ClientCheck
            | E::GameNews
            | E::EnterWorld
            | E::ItemsPrice

            // Private conversation and channel management.
            | E::PrivateMessage { .. }
            | E::ChannelOpened { .. }
            | E::ChannelsDialog
            | E::PrivateChannelCreated { .. }
            | E::PrivateChannelOpened { .. }
            | E::PrivateChannelClosed { .. }
            | E::ChannelEvent { .. }
            | E::InfoBox { .. }
            | E::MessageDialog { .. }
            | E::Tutorial { .. }
            | E::MapMarkerAdded { .. }
            | E::FightModes

            // One-client windows and dialogs.
            | E::ReloginWindow { .. }
            | E::TextWindow { .. }
            | E::StaticTextWindow { .. }
            | E::HouseWindow { .. }
            | E::OutfitWindow
            | E::PodiumWindow { .. }
            | E::MonsterPodiumWindow { .. }
            | E::ModalWindow { .. }
            | E::WheelWindow { .. }

            // Trade, shop, and market.
            | E::TradeRequested { .. }
            | E::TradeClosed
            | E::ShopOpened { .. }
            | E::ShopClosed
            | E::SaleItemList { .. }
            | E::MarketEntered { .. }
            | E::MarketLeft
            | E::MarketBrowseItem { .. }
            | E::MarketOwnOffers { .. }
            | E::MarketOwnHistory { .. }
            | E::MarketDetail { .. }
            | E::MarketOfferAccepted { .. }
            | E::MarketOfferCancelled { .. }

            // Imbuement and forge.
            | E::ImbuementWindowOpened { .. }
            | E::ImbuementWindowClosed
            | E::ImbuementResult { .. }
            | E::ForgeOpened
            | E::ForgeResult { .. }
            | E::ForgeError { .. }
            | E::ForgeHistory { .. }
            | E::ForgeWindowClosed
            | E::ForgingData

            // Cyclopedia and progression screens.
            | E::CyclopediaCharacterNoData { .. }
            | E::CyclopediaCharacterBaseInformation
            | E::CyclopediaCharacterGeneralStats
            | E::CyclopediaCharacterCombatStats
            | E::CyclopediaCharacterRecentDeaths { .. }
            | E::CyclopediaCharacterRecentPvpKills { .. }
            | E::CyclopediaCharacterAchievements { .. }
            | E::CyclopediaCharacterItemSummary
            | E::CyclopediaCharacterOutfitsMounts
            | E::CyclopediaCharacterStoreSummary
            | E::CyclopediaCharacterInspection
            | E::CyclopediaCharacterBadges
            | E::CyclopediaCharacterTitles
            | E::CyclopediaMonsterTracker { .. }
            | E::Highscores { .. }
            | E::HighscoresNoData
            | E::BestiaryCharms
            | E::BestiaryEntryChanged { .. }
            | E::Bosstiary
            | E::BosstiarySlots
            | E::BosstiaryEntryChanged { .. }
            | E::BosstiaryCooldownTimer
            | E::ItemInspection { .. }

            // Prey and task hunting.
            | E::PreyData { .. }
            | E::PreyTimeLeft { .. }
            | E::TaskHuntingData { .. }

            // Party views.
            | E::PartyCreatureUpdated { .. }
            | E::PartyCreatureShield { .. }
            | E::PartyCreatureSkull { .. }
            | E::PartyCreatureHealth { .. }
            | E::PartyMemberMana { .. }
            | E::PartyCreatureShowStatus { .. }
            | E::PartyMemberVocation { .. }
            | E::PlayerVocation { .. }
            | E::PartyAnalyzer

            // Team finder.
            | E::TeamFinderLeader { .. }
            | E::TeamFinderList

            // Activity trackers.
            | E::KillTracker { .. }
            | E::LootStats { .. }
            | E::SupplyTracker { .. }
            | E::ImpactTracker { .. }
            | E::InputAnalyzer { .. }

            // Cooldowns.
            | E::SpellCooldown { .. }
            | E::SpellGroupCooldown { .. }
            | E::UseItemCooldown { .. }

            // Session control.
            | E::Logout { .. }
            | E::SessionEnded { .. }
            | E::Disconnected { .. } => BroadcastPolicy::OwnerOnly,
        }
    }

    /// Whether a [`BroadcastPolicy::ConditionalBroadcast`] event must be
    /// withheld from viewers.
    ///
    /// Returns `false` for every unconditional event; callers only need to
    /// consult it when the policy is conditional.
    pub fn suppressed_for_viewers(&self) -> bool {
        match self {
            Self::CreatureSpeech { kind, .. } => kind.is_private_delivery(),
            _ => false,
        }
    }
}
