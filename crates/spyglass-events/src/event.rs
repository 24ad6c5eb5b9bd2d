//! The outbound event surface.
//!
//! [`OutboundEvent`] has one variant per outbound protocol operation a
//! connection endpoint can receive. The broadcast proxy treats the whole
//! surface uniformly: an event is constructed once by the game layer and
//! delivered to connection endpoints; which endpoints receive it is decided
//! by [`policy`](OutboundEvent::policy) (see [`crate::policy`]).
//!
//! Variants are grouped by domain below. Payloads are value snapshots —
//! wire encoding, visibility clipping, and game-state lookups all belong to
//! the endpoint, not to this crate.

use serde::{Deserialize, Serialize};
use spyglass_core::{CreatureId, Direction, Position};

use crate::chat::{ChannelEventKind, ChannelId, MessageClass, SpeechKind};
use crate::payloads::{
    ContainerId, CreatureSnapshot, ForgeAction, InventorySlot, ItemSnapshot, LightInfo,
    MarketOffer, ModalWindowSnapshot, Outfit, PartyShield, SessionEndReason, ShopEntry, Skull,
    SlottedItem, SoundSource, SpeakerSnapshot, SquareColor, VipStatus,
};

/// One outbound protocol operation, as a value.
///
/// The variant set mirrors the full outbound surface of a game connection
/// (~150 operations). Every variant carries the data the operation needs;
/// refresh-style operations whose content the endpoint derives from game
/// state it already holds (stats, skills, cyclopedia screens, ...) carry
/// none.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum OutboundEvent {
    // ─────────────────────────────────────────────────────────────────────
    // Liveness & transport
    // ─────────────────────────────────────────────────────────────────────
    /// Liveness probe to the client.
    Ping,
    /// Reply to a client-initiated probe.
    PingBack,
    /// Pre-encoded protocol payload forwarded verbatim.
    RawPayload {
        /// Already-encoded message bytes.
        bytes: Vec<u8>,
    },

    // ─────────────────────────────────────────────────────────────────────
    // World & creatures
    // ─────────────────────────────────────────────────────────────────────
    /// A creature entered view (or logged in at this position).
    CreatureAppeared {
        /// The creature as it appears.
        creature: CreatureSnapshot,
        /// Where it appeared.
        position: Position,
        /// Stack index on the tile.
        stack_index: u8,
        /// Whether this appearance is a login (vs. walking into view).
        is_login: bool,
    },
    /// A creature moved between tiles.
    CreatureMoved {
        /// The moving creature.
        creature: CreatureId,
        /// Tile it left.
        from: Position,
        /// Stack index it occupied there.
        from_stack: u8,
        /// Tile it entered.
        to: Position,
        /// Stack index it occupies now.
        to_stack: u8,
        /// Whether the move was a teleport (no walk animation).
        teleport: bool,
    },
    /// A creature turned in place.
    CreatureTurned {
        /// The turning creature.
        creature: CreatureId,
        /// Its stack index.
        stack_index: u8,
        /// New facing.
        direction: Direction,
    },
    /// A creature's outfit changed.
    CreatureOutfitChanged {
        /// The creature.
        creature: CreatureId,
        /// New appearance.
        outfit: Outfit,
    },
    /// A creature's emitted light changed.
    CreatureLightChanged {
        /// The creature.
        creature: CreatureId,
        /// New light.
        light: LightInfo,
    },
    /// A creature's walking speed changed.
    CreatureSpeedChanged {
        /// The creature.
        creature: CreatureId,
        /// New base+bonus speed.
        speed: u32,
    },
    /// A creature's visible health bar changed.
    CreatureHealthChanged {
        /// The creature.
        creature: CreatureId,
        /// Health as a percentage of maximum.
        health_percent: u8,
    },
    /// A creature's PvP skull marker changed.
    CreatureSkullChanged {
        /// The creature.
        creature: CreatureId,
        /// New skull.
        skull: Skull,
    },
    /// A creature's party shield marker changed.
    CreatureShieldChanged {
        /// The creature.
        creature: CreatureId,
        /// New shield.
        shield: PartyShield,
    },
    /// Whether the player can walk through a creature changed.
    CreatureWalkthroughChanged {
        /// The creature.
        creature: CreatureId,
        /// New walkthrough state.
        walkthrough: bool,
    },
    /// Square highlight around a creature (e.g. attack flash).
    CreatureSquare {
        /// The creature.
        creature: CreatureId,
        /// Highlight colour.
        color: SquareColor,
    },
    /// An item appeared on a tile.
    TileItemAdded {
        /// Tile position.
        position: Position,
        /// Stack index of the new item.
        stack_index: u8,
        /// The item.
        item: ItemSnapshot,
    },
    /// An item on a tile changed.
    TileItemUpdated {
        /// Tile position.
        position: Position,
        /// Stack index of the item.
        stack_index: u8,
        /// New item state.
        item: ItemSnapshot,
    },
    /// A thing was removed from a tile.
    TileThingRemoved {
        /// Tile position.
        position: Position,
        /// Stack index that was vacated.
        stack_index: u8,
    },
    /// A creature on a tile needs re-rendering in place.
    TileCreatureUpdated {
        /// Tile position.
        position: Position,
        /// Stack index of the creature.
        stack_index: u8,
        /// The creature as it now appears.
        creature: CreatureSnapshot,
    },
    /// A whole tile needs re-sending (endpoint composes the snapshot).
    TileRefreshed {
        /// Tile position.
        position: Position,
    },
    /// Ambient world light changed.
    WorldLightChanged {
        /// New world light.
        light: LightInfo,
    },
    /// A magic effect played at a position.
    MagicEffect {
        /// Where the effect plays.
        position: Position,
        /// Effect id.
        effect: u16,
    },
    /// A looping magic effect was removed from a position.
    MagicEffectRemoved {
        /// Where the effect was playing.
        position: Position,
        /// Effect id.
        effect: u16,
    },
    /// A projectile effect travelled between two positions.
    DistanceEffect {
        /// Origin.
        from: Position,
        /// Target.
        to: Position,
        /// Projectile effect id.
        effect: u8,
    },
    /// In-game time of day changed.
    WorldTime {
        /// Minutes since midnight, game time.
        minutes: i32,
    },

    // ─────────────────────────────────────────────────────────────────────
    // Containers & inventory
    // ─────────────────────────────────────────────────────────────────────
    /// A container window opened (contents composed by the endpoint).
    ContainerOpened {
        /// Client-side container id.
        container: ContainerId,
        /// Whether an "up" navigation arrow applies.
        has_parent: bool,
        /// First visible item index (pagination).
        first_index: u16,
    },
    /// A container window closed.
    ContainerClosed {
        /// Client-side container id.
        container: ContainerId,
    },
    /// An item was added to an open container.
    ContainerItemAdded {
        /// Container id.
        container: ContainerId,
        /// Slot the item landed in.
        slot: u16,
        /// The item.
        item: ItemSnapshot,
    },
    /// An item in an open container changed.
    ContainerItemUpdated {
        /// Container id.
        container: ContainerId,
        /// Slot of the item.
        slot: u16,
        /// New item state.
        item: ItemSnapshot,
    },
    /// An item was removed from an open container.
    ContainerItemRemoved {
        /// Container id.
        container: ContainerId,
        /// Slot that was vacated.
        slot: u16,
        /// Item now shown in the last slot, if the container overflows.
        #[serde(skip_serializing_if = "Option::is_none")]
        last_item: Option<ItemSnapshot>,
    },
    /// An equipment slot changed.
    InventoryItemChanged {
        /// The slot.
        slot: InventorySlot,
        /// New content (`None` clears the slot).
        #[serde(skip_serializing_if = "Option::is_none")]
        item: Option<ItemSnapshot>,
    },
    /// Client-cached inventory item ids need refreshing.
    InventoryIds,
    /// Imbuement state across equipped items.
    InventoryImbuements {
        /// Imbued items per slot.
        items: Vec<SlottedItem>,
    },
    /// Supply stash / depot search shortcuts became available.
    SpecialContainersAvailable,
    /// Managed loot container assignments changed.
    LootContainers,
    /// Depot box tier listing (detail composed by the endpoint).
    DepotItems {
        /// Number of distinct item/tier entries.
        count: u16,
    },
    /// Depot search UI closed.
    DepotSearchClosed,
    /// Depot search results for one item type.
    DepotSearchDetail {
        /// Item type searched.
        item_id: u16,
        /// Tier searched.
        tier: u8,
        /// Matches in the depot.
        depot_count: u32,
        /// Matches in the inbox.
        inbox_count: u32,
        /// Matches in the supply stash.
        stash_count: u32,
    },
    /// Supply stash window opened.
    StashOpened,

    // ─────────────────────────────────────────────────────────────────────
    // Player state
    // ─────────────────────────────────────────────────────────────────────
    /// Player stats (health, mana, capacity, level, ...) need refreshing.
    StatsChanged,
    /// Player skills need refreshing.
    SkillsChanged,
    /// Basic account/character data needs refreshing.
    BasicData,
    /// Blessing status changed.
    BlessStatus,
    /// Status icon bitset above the health bar.
    StatusIconsChanged {
        /// Active icon bitmask.
        icons: u32,
    },
    /// Resting-area status changed.
    RestingStatus {
        /// Resting protection level.
        protection: u8,
    },
    /// Experience tracker sample.
    ExperienceTracker {
        /// Raw experience gained.
        raw_exp: i64,
        /// Experience after rate modifiers.
        final_exp: i64,
    },
    /// Full resource balance refresh.
    ResourcesBalance {
        /// Carried gold.
        money: u64,
        /// Bank balance.
        bank: u64,
        /// Prey wildcards.
        prey_cards: u64,
        /// Task hunting points.
        task_hunting: u64,
        /// Forge dust.
        forge_dust: u64,
        /// Forge slivers.
        forge_slivers: u64,
        /// Forge cores.
        forge_cores: u64,
    },
    /// Single resource balance update.
    ResourceBalance {
        /// Resource discriminator (wire code).
        resource: u8,
        /// New amount.
        amount: u64,
    },
    /// Unjustified kill points summary.
    UnjustifiedPoints {
        /// Progress toward the daily cap, percent.
        day_progress: u8,
        /// Kills left today before a skull.
        day_left: u8,
        /// Progress toward the weekly cap, percent.
        week_progress: u8,
        /// Kills left this week.
        week_left: u8,
        /// Progress toward the monthly cap, percent.
        month_progress: u8,
        /// Kills left this month.
        month_left: u8,
        /// Remaining skull time in days.
        skull_duration: u8,
    },
    /// Store coin balance changed.
    CoinBalance,
    /// Anti-bot client integrity probe.
    ClientCheck,
    /// Game news ticker refresh.
    GameNews,
    /// World entry completed (post-login handshake).
    EnterWorld,
    /// Current item market price list.
    ItemsPrice,

    // ─────────────────────────────────────────────────────────────────────
    // VIP list
    // ─────────────────────────────────────────────────────────────────────
    /// A VIP's online status changed.
    VipStatusChanged {
        /// The VIP's character id.
        vip: CreatureId,
        /// New status.
        status: VipStatus,
    },
    /// A VIP list entry (sent during login or on add).
    VipEntryAdded {
        /// The VIP's character id.
        vip: CreatureId,
        /// Character name.
        name: String,
        /// Player-written note.
        description: String,
        /// Icon index.
        icon: u32,
        /// Whether login notifications are enabled.
        notify: bool,
        /// Current status.
        status: VipStatus,
    },
    /// VIP group definitions changed.
    VipGroupsChanged,

    // ─────────────────────────────────────────────────────────────────────
    // Chat & text
    // ─────────────────────────────────────────────────────────────────────
    /// A creature spoke on the map.
    ///
    /// Conditional broadcast: withheld from viewers when the kind is a
    /// directed private delivery (see [`SpeechKind::is_private_delivery`]).
    CreatureSpeech {
        /// Who spoke.
        speaker: SpeakerSnapshot,
        /// How it was uttered.
        kind: SpeechKind,
        /// What was said.
        text: String,
        /// Where it was said, when positional.
        #[serde(skip_serializing_if = "Option::is_none")]
        position: Option<Position>,
    },
    /// A creature spoke in a chat channel.
    ChannelSpeech {
        /// Who spoke.
        speaker: SpeakerSnapshot,
        /// How it was uttered.
        kind: SpeechKind,
        /// What was said.
        text: String,
        /// The channel.
        channel: ChannelId,
    },
    /// An authored message posted to a channel (no speaking creature).
    ChannelMessage {
        /// Author name shown in the channel.
        author: String,
        /// Message text.
        text: String,
        /// Rendering kind.
        kind: SpeechKind,
        /// The channel.
        channel: ChannelId,
    },
    /// A private message delivered to this client.
    PrivateMessage {
        /// The sender.
        speaker: SpeakerSnapshot,
        /// Rendering kind.
        kind: SpeechKind,
        /// Message text.
        text: String,
    },
    /// A chat channel opened (member lists composed by the endpoint).
    ChannelOpened {
        /// The channel.
        channel: ChannelId,
        /// Channel display name.
        name: String,
    },
    /// The channel selection dialog.
    ChannelsDialog,
    /// A private chat channel owned by the player was created.
    PrivateChannelCreated {
        /// The channel.
        channel: ChannelId,
        /// Channel display name.
        name: String,
    },
    /// A conversation window to another player opened.
    PrivateChannelOpened {
        /// Conversation partner name.
        receiver: String,
    },
    /// A private channel closed.
    PrivateChannelClosed {
        /// The channel.
        channel: ChannelId,
    },
    /// Channel membership change notice.
    ChannelEvent {
        /// The channel.
        channel: ChannelId,
        /// Affected player name.
        player_name: String,
        /// What happened.
        event: ChannelEventKind,
    },
    /// A classified server text message.
    TextMessage {
        /// Message class (colour/console routing).
        class: MessageClass,
        /// Message text.
        text: String,
    },
    /// The current attack target was cleared.
    TargetCancelled,
    /// The current walk was cancelled (position resync).
    WalkCancelled,
    /// Modal information box.
    InfoBox {
        /// Body text.
        text: String,
    },
    /// Scripted message dialog.
    MessageDialog {
        /// Body text.
        text: String,
    },
    /// Tutorial hint trigger.
    Tutorial {
        /// Hint id.
        tutorial_id: u8,
    },
    /// A map marker was placed on the client minimap.
    MapMarkerAdded {
        /// Marked position.
        position: Position,
        /// Marker glyph id.
        mark: u8,
        /// Marker description.
        description: String,
    },
    /// Fight mode / chase mode / secure mode resync.
    FightModes,

    // ─────────────────────────────────────────────────────────────────────
    // Sound & client-capability-gated effects
    // ─────────────────────────────────────────────────────────────────────
    /// A sound effect played at a position. Requires a current client.
    SoundEffect {
        /// Where the sound plays.
        position: Position,
        /// Sound id.
        sound: u16,
        /// Attribution of the sound.
        source: SoundSource,
    },
    /// Two layered sound effects. Requires a current client.
    PairedSoundEffect {
        /// Where the sounds play.
        position: Position,
        /// Primary sound id.
        primary: u16,
        /// Attribution of the primary sound.
        primary_source: SoundSource,
        /// Secondary sound id.
        secondary: u16,
        /// Attribution of the secondary sound.
        secondary_source: SoundSource,
    },
    /// Creature status icon update. Requires a current client.
    CreatureIcon {
        /// The creature.
        creature: CreatureId,
    },

    // ─────────────────────────────────────────────────────────────────────
    // Creature detail (owner-only resyncs)
    // ─────────────────────────────────────────────────────────────────────
    /// Full creature resync for one creature.
    CreatureUpdated {
        /// The creature.
        creature: CreatureId,
    },
    /// Remove-and-re-add of a creature in view.
    CreatureReloaded {
        /// The creature.
        creature: CreatureId,
    },
    /// Creature classification changed (player/monster/NPC/summon).
    CreatureTypeChanged {
        /// The creature.
        creature: CreatureId,
        /// New type code.
        creature_type: u8,
    },
    /// Guild war emblem changed.
    CreatureEmblemChanged {
        /// The creature.
        creature: CreatureId,
    },
    /// Helper count (party/guild assistance indicator) changed.
    CreatureHelpers {
        /// The creature.
        creature: CreatureId,
        /// Number of helpers.
        helpers: u16,
    },

    // ─────────────────────────────────────────────────────────────────────
    // Windows & dialogs
    // ─────────────────────────────────────────────────────────────────────
    /// Death relogin window.
    ReloginWindow {
        /// Unfair-fight death penalty reduction, percent.
        unfair_fight_reduction: u8,
    },
    /// Editable text window for a writable item.
    TextWindow {
        /// Window id echoed back on write.
        window_id: u32,
        /// The writable item.
        item: ItemSnapshot,
        /// Maximum text length accepted.
        max_length: u16,
        /// Whether the client may edit the text.
        writable: bool,
    },
    /// Read-only text window (e.g. item description overflow).
    StaticTextWindow {
        /// Window id.
        window_id: u32,
        /// Item type shown in the header.
        item_id: u16,
        /// Body text.
        text: String,
    },
    /// House access-list editor window.
    HouseWindow {
        /// Window id echoed back on submit.
        window_id: u32,
        /// Current access list text.
        text: String,
    },
    /// Outfit selection window.
    OutfitWindow,
    /// Character podium configuration window.
    PodiumWindow {
        /// The podium item.
        item: ItemSnapshot,
        /// Podium position.
        position: Position,
        /// Podium item type id.
        item_id: u16,
        /// Stack index on the tile.
        stack_index: u8,
    },
    /// Monster podium configuration window.
    MonsterPodiumWindow {
        /// The podium item.
        item: ItemSnapshot,
        /// Podium position.
        position: Position,
        /// Podium item type id.
        item_id: u16,
        /// Stack index on the tile.
        stack_index: u8,
    },
    /// Scripted modal dialog.
    ModalWindow {
        /// The dialog.
        window: ModalWindowSnapshot,
    },
    /// Wheel of Destiny window.
    WheelWindow {
        /// Character id whose wheel is shown.
        owner_id: u32,
    },

    // ─────────────────────────────────────────────────────────────────────
    // Trade & shop
    // ─────────────────────────────────────────────────────────────────────
    /// A player-to-player trade window opened or updated.
    TradeRequested {
        /// Counterparty name.
        trader_name: String,
        /// Item under negotiation.
        item: ItemSnapshot,
        /// Whether this is the acknowledging (counter) side.
        acknowledged: bool,
    },
    /// The trade window closed.
    TradeClosed,
    /// An NPC shop window opened.
    ShopOpened {
        /// The shopkeeper.
        npc: CreatureId,
    },
    /// The NPC shop window closed.
    ShopClosed,
    /// Shop listing of goods the player can currently sell.
    SaleItemList {
        /// Sellable entries.
        entries: Vec<ShopEntry>,
    },

    // ─────────────────────────────────────────────────────────────────────
    // Market
    // ─────────────────────────────────────────────────────────────────────
    /// Market window opened on a depot.
    MarketEntered {
        /// Depot the market session uses.
        depot_id: u32,
    },
    /// Market window closed.
    MarketLeft,
    /// Offer listings for one browsed item.
    MarketBrowseItem {
        /// Browsed item type.
        item_id: u16,
        /// Browsed tier.
        tier: u8,
        /// Open buy offers.
        buy_offers: Vec<MarketOffer>,
        /// Open sell offers.
        sell_offers: Vec<MarketOffer>,
    },
    /// The player's own open offers.
    MarketOwnOffers {
        /// Own buy offers.
        buy_offers: Vec<MarketOffer>,
        /// Own sell offers.
        sell_offers: Vec<MarketOffer>,
    },
    /// The player's historical offers.
    MarketOwnHistory {
        /// Past buy offers.
        buy_offers: Vec<MarketOffer>,
        /// Past sell offers.
        sell_offers: Vec<MarketOffer>,
    },
    /// Market statistics detail for one item.
    MarketDetail {
        /// Item type.
        item_id: u16,
        /// Tier.
        tier: u8,
    },
    /// One of the player's offers was accepted.
    MarketOfferAccepted {
        /// The accepted offer.
        offer: MarketOffer,
    },
    /// One of the player's offers was cancelled.
    MarketOfferCancelled {
        /// The cancelled offer.
        offer: MarketOffer,
    },

    // ─────────────────────────────────────────────────────────────────────
    // Imbuement & forge
    // ─────────────────────────────────────────────────────────────────────
    /// Imbuement window opened for an item.
    ImbuementWindowOpened {
        /// The item being imbued.
        item: ItemSnapshot,
    },
    /// Imbuement window closed.
    ImbuementWindowClosed,
    /// Outcome text of an imbuement attempt.
    ImbuementResult {
        /// Result message.
        message: String,
    },
    /// Exaltation forge window opened.
    ForgeOpened,
    /// Outcome of a forge operation.
    ForgeResult {
        /// Which operation ran.
        action: ForgeAction,
        /// Left input item type.
        left_item_id: u16,
        /// Left input tier.
        left_tier: u8,
        /// Right input item type.
        right_item_id: u16,
        /// Right input tier.
        right_tier: u8,
        /// Whether the operation succeeded.
        success: bool,
        /// Bonus outcome code.
        bonus: u8,
        /// Cores consumed.
        core_count: u8,
        /// Whether convergence mode was used.
        convergence: bool,
    },
    /// A forge operation was rejected.
    ForgeError {
        /// Human-readable reason.
        message: String,
    },
    /// Forge history page.
    ForgeHistory {
        /// Requested page.
        page: u8,
    },
    /// Forge window closed.
    ForgeWindowClosed,
    /// Forge resource/config data refresh.
    ForgingData,

    // ─────────────────────────────────────────────────────────────────────
    // Cyclopedia & progression
    // ─────────────────────────────────────────────────────────────────────
    /// Character info request failed for a section.
    CyclopediaCharacterNoData {
        /// Requested section code.
        info_type: u8,
        /// Error code.
        error_code: u8,
    },
    /// Character summary section.
    CyclopediaCharacterBaseInformation,
    /// General stats section.
    CyclopediaCharacterGeneralStats,
    /// Combat stats section.
    CyclopediaCharacterCombatStats,
    /// Recent deaths section.
    CyclopediaCharacterRecentDeaths {
        /// Page shown.
        page: u16,
        /// Total pages.
        pages: u16,
    },
    /// Recent PvP kills section.
    CyclopediaCharacterRecentPvpKills {
        /// Page shown.
        page: u16,
        /// Total pages.
        pages: u16,
    },
    /// Achievements section.
    CyclopediaCharacterAchievements {
        /// Number of unlocked secret achievements.
        secrets_unlocked: i16,
    },
    /// Item summary section.
    CyclopediaCharacterItemSummary,
    /// Outfits and mounts section.
    CyclopediaCharacterOutfitsMounts,
    /// Store purchases section.
    CyclopediaCharacterStoreSummary,
    /// Inspection view of the character.
    CyclopediaCharacterInspection,
    /// Badges section.
    CyclopediaCharacterBadges,
    /// Titles section.
    CyclopediaCharacterTitles,
    /// Bestiary/bosstiary tracker list refresh.
    CyclopediaMonsterTracker {
        /// Whether the boss tracker (vs. bestiary tracker) is shown.
        is_boss: bool,
    },
    /// Highscores page.
    Highscores {
        /// Category code.
        category: u8,
        /// Vocation filter.
        vocation: u32,
        /// Page shown.
        page: u16,
        /// Total pages.
        pages: u16,
    },
    /// Highscores unavailable notice.
    HighscoresNoData,
    /// Bestiary charm overview.
    BestiaryCharms,
    /// One bestiary race entry changed.
    BestiaryEntryChanged {
        /// Race id.
        race_id: u16,
    },
    /// Bosstiary overview.
    Bosstiary,
    /// Bosstiary slot configuration.
    BosstiarySlots,
    /// One bosstiary entry changed.
    BosstiaryEntryChanged {
        /// Boss race id.
        boss_id: u32,
    },
    /// Boss cooldown timer overview.
    BosstiaryCooldownTimer,
    /// Detailed item inspection view.
    ItemInspection {
        /// Item type inspected.
        item_id: u16,
        /// Stack count inspected.
        count: u8,
        /// Whether opened from the cyclopedia (vs. in-world inspect).
        cyclopedia: bool,
    },

    // ─────────────────────────────────────────────────────────────────────
    // Prey & task hunting
    // ─────────────────────────────────────────────────────────────────────
    /// Full prey slot data.
    PreyData {
        /// Slot index.
        slot: u8,
    },
    /// Remaining prey bonus time for a slot.
    PreyTimeLeft {
        /// Slot index.
        slot: u8,
    },
    /// Task hunting slot data.
    TaskHuntingData {
        /// Slot index.
        slot: u8,
    },

    // ─────────────────────────────────────────────────────────────────────
    // Party
    // ─────────────────────────────────────────────────────────────────────
    /// Party-view resync for a creature.
    PartyCreatureUpdated {
        /// The creature.
        creature: CreatureId,
    },
    /// Party shield change delivered through the party view.
    PartyCreatureShield {
        /// The creature.
        creature: CreatureId,
    },
    /// Skull change delivered through the party view.
    PartyCreatureSkull {
        /// The creature.
        creature: CreatureId,
    },
    /// Health change delivered through the party view.
    PartyCreatureHealth {
        /// The creature.
        creature: CreatureId,
        /// Health as a percentage of maximum.
        health_percent: u8,
    },
    /// Party member mana update.
    PartyMemberMana {
        /// The member.
        player: CreatureId,
        /// Mana as a percentage of maximum.
        mana_percent: u8,
    },
    /// Whether a party member's status is shown.
    PartyCreatureShowStatus {
        /// The creature.
        creature: CreatureId,
        /// Whether status is visible.
        visible: bool,
    },
    /// Party member vocation update.
    PartyMemberVocation {
        /// The member.
        player: CreatureId,
    },
    /// Player vocation resync (outside party context).
    PlayerVocation {
        /// The player.
        player: CreatureId,
    },
    /// Party hunt analyzer refresh.
    PartyAnalyzer,

    // ─────────────────────────────────────────────────────────────────────
    // Team finder
    // ─────────────────────────────────────────────────────────────────────
    /// Team finder leader view refresh.
    TeamFinderLeader {
        /// Whether the posting is being reset.
        reset: bool,
    },
    /// Team finder listing for members.
    TeamFinderList,

    // ─────────────────────────────────────────────────────────────────────
    // Combat & activity trackers
    // ─────────────────────────────────────────────────────────────────────
    /// Kill tracker entry (corpse contents composed by the endpoint).
    KillTracker {
        /// Killed creature name.
        name: String,
        /// Killed creature outfit.
        outfit: Outfit,
    },
    /// Loot tracker entry.
    LootStats {
        /// Looted item.
        item: ItemSnapshot,
        /// Looted count.
        count: u8,
    },
    /// Supply tracker entry.
    SupplyTracker {
        /// Consumed item.
        item: ItemSnapshot,
    },
    /// Impact (damage/heal) tracker sample.
    ImpactTracker {
        /// Combat type code.
        damage_type: u8,
        /// Amount dealt or healed.
        amount: i32,
    },
    /// Incoming damage analyzer sample.
    InputAnalyzer {
        /// Combat type code.
        damage_type: u8,
        /// Amount received.
        amount: i32,
        /// Attacker name.
        target: String,
    },

    // ─────────────────────────────────────────────────────────────────────
    // Cooldowns
    // ─────────────────────────────────────────────────────────────────────
    /// A single spell went on cooldown.
    SpellCooldown {
        /// The spell.
        spell_id: u16,
        /// Cooldown in milliseconds.
        duration_ms: u32,
    },
    /// A spell group went on cooldown.
    SpellGroupCooldown {
        /// Spell group code.
        group: u8,
        /// Cooldown in milliseconds.
        duration_ms: u32,
    },
    /// The item-use cooldown triggered.
    UseItemCooldown {
        /// Cooldown in milliseconds.
        duration_ms: u32,
    },

    // ─────────────────────────────────────────────────────────────────────
    // Session control
    // ─────────────────────────────────────────────────────────────────────
    /// Ask the client to perform a logout.
    Logout {
        /// Whether to play the logout effect.
        display_effect: bool,
        /// Whether the logout bypasses combat checks.
        forced: bool,
    },
    /// Session-end notice shown before the connection drops.
    SessionEnded {
        /// Why the session ended.
        reason: SessionEndReason,
    },
    /// Hard disconnect with an error box.
    Disconnected {
        /// Message shown to the user.
        reason: String,
    },
}

impl OutboundEvent {
    /// A failure-class text message, the cancel-message shorthand.
    pub fn cancel_message(text: impl Into<String>) -> Self {
        Self::TextMessage { class: MessageClass::Failure, text: text.into() }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use spyglass_core::CreatureId;

    use super::*;

    #[test]
    fn serde_is_internally_tagged_camel_case() {
        let event = OutboundEvent::CreatureMoved {
            creature: CreatureId::new(7),
            from: Position::new(100, 100, 7),
            from_stack: 2,
            to: Position::new(101, 100, 7),
            to_stack: 1,
            teleport: false,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "creatureMoved");
        assert_eq!(json["fromStack"], 2);
        assert_eq!(json["teleport"], false);

        let back: OutboundEvent = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn serde_unit_variants_carry_only_the_tag() {
        let json = serde_json::to_value(OutboundEvent::StatsChanged).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "statsChanged" }));
    }

    #[test]
    fn serde_omits_absent_optionals() {
        let event = OutboundEvent::InventoryItemChanged { slot: InventorySlot::Ammo, item: None };
        let json = serde_json::to_value(&event).unwrap();
        assert!(json.get("item").is_none());
    }

    #[test]
    fn cancel_message_is_a_failure_text_message() {
        let event = OutboundEvent::cancel_message("Sorry, not possible.");
        assert_matches!(
            event,
            OutboundEvent::TextMessage { class: MessageClass::Failure, ref text }
                if text == "Sorry, not possible."
        );
    }
}
