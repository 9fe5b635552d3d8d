use super::{
    Combatant, DamageReport, Describe, EquipSlot, Equipment, HealthStatus, HitZone, Item, ItemBag,
    RangeBand, ResourceMeter, Roubles, StaminaStatus, Weight,
};
use crate::combat::damage;
use crate::config::GameConfig;
use crate::env::ConsumableEffect;
use crate::error::ActionError;

/// The player character.
///
/// Carried weight is backpack plus worn equipment and never exceeds the
/// carry capacity. Bleeding is only possible while alive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    name: String,
    pub health: ResourceMeter,
    pub stamina: ResourceMeter,
    base_damage: u32,
    base_defense: u32,
    bleeding: bool,
    pub roubles: Roubles,
    pub equipment: Equipment,
    pub inventory: ItemBag,
}

/// What a consumable did when used.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsumableUse {
    pub item: String,
    pub effect: ConsumableEffect,
    /// Health or stamina actually restored; 1 when bleeding was cured.
    pub amount: u32,
    /// False when the item had nothing to do and stayed in the backpack.
    pub consumed: bool,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            health: ResourceMeter::full(GameConfig::PLAYER_MAX_HEALTH),
            stamina: ResourceMeter::full(GameConfig::PLAYER_MAX_STAMINA),
            base_damage: GameConfig::PLAYER_BASE_DAMAGE,
            base_defense: GameConfig::PLAYER_BASE_DEFENSE,
            bleeding: false,
            roubles: 0,
            equipment: Equipment::new(),
            inventory: ItemBag::new(GameConfig::PLAYER_CARRY_CAPACITY),
        }
    }

    pub fn is_bleeding(&self) -> bool {
        self.bleeding
    }

    /// Starts bleeding; returns true if the player was not already bleeding.
    pub fn start_bleeding(&mut self) -> bool {
        let started = self.is_alive() && !self.bleeding;
        self.bleeding |= started;
        started
    }

    pub fn stop_bleeding(&mut self) -> bool {
        std::mem::replace(&mut self.bleeding, false)
    }

    pub fn capacity(&self) -> Weight {
        self.inventory.capacity()
    }

    pub fn carried_weight(&self) -> Weight {
        self.inventory.weight() + self.equipment.weight()
    }

    pub fn ensure_can_carry(&self, item: &Item) -> Result<(), ActionError> {
        self.inventory.ensure_fits(item, self.equipment.weight())
    }

    /// Adds `item` to the backpack if it fits.
    pub fn pick_up(&mut self, item: Item) -> Result<(), ActionError> {
        self.ensure_can_carry(&item)?;
        self.inventory.push(item);
        Ok(())
    }

    /// Damage and optimal range of the equipped weapon, or bare hands.
    pub fn attack_profile(&self) -> (u32, RangeBand) {
        self.equipment
            .weapon()
            .and_then(Item::as_weapon)
            .map_or((self.base_damage, RangeBand::VeryShort), |weapon| {
                (weapon.damage, weapon.optimal_range)
            })
    }

    /// Equips the backpack item at `index`; a replaced item returns to the backpack.
    ///
    /// Carried weight is unchanged because the item only moves between the
    /// backpack and a slot.
    pub fn equip(&mut self, index: usize) -> Result<(EquipSlot, Option<String>), ActionError> {
        let item = self
            .inventory
            .get(index)
            .ok_or_else(|| ActionError::no_target(index.to_string()))?;
        let slot = EquipSlot::for_item(item).ok_or_else(|| ActionError::IllegalEquip {
            item: item.name().to_owned(),
        })?;
        let Some(item) = self.inventory.take(index) else {
            return Err(ActionError::no_target(index.to_string()));
        };
        let replaced = self.equipment.equip(item)?;
        let replaced_name = replaced.as_ref().map(|item| item.name().to_owned());
        if let Some(replaced) = replaced {
            self.inventory.push(replaced);
        }
        Ok((slot, replaced_name))
    }

    /// Moves the item in `slot` back into the backpack.
    pub fn unequip(&mut self, slot: EquipSlot) -> Result<String, ActionError> {
        let item = self
            .equipment
            .unequip(slot)
            .ok_or_else(|| ActionError::no_target(slot.to_string()))?;
        let name = item.name().to_owned();
        self.inventory.push(item);
        Ok(name)
    }

    /// Consumes the backpack item at `index`.
    ///
    /// Bleeding cures are kept when the player is not bleeding.
    pub fn use_consumable(&mut self, index: usize) -> Result<ConsumableUse, ActionError> {
        let item = self
            .inventory
            .get(index)
            .ok_or_else(|| ActionError::no_target(index.to_string()))?;
        let consumable = *item.as_consumable().ok_or_else(|| ActionError::NotUsable {
            item: item.name().to_owned(),
        })?;
        let name = item.name().to_owned();
        if consumable.effect == ConsumableEffect::CureBleeding && !self.bleeding {
            return Ok(ConsumableUse {
                item: name,
                effect: consumable.effect,
                amount: 0,
                consumed: false,
            });
        }
        self.inventory.take(index);

        let amount = match consumable.effect {
            ConsumableEffect::Heal => self.health.restore(consumable.magnitude),
            ConsumableEffect::StaminaRestore => self.stamina.restore(consumable.magnitude),
            ConsumableEffect::CureBleeding => u32::from(self.stop_bleeding()),
        };
        Ok(ConsumableUse {
            item: name,
            effect: consumable.effect,
            amount,
            consumed: true,
        })
    }

    pub fn spend_stamina(&mut self, cost: u32) -> Result<(), ActionError> {
        if self.stamina.current < cost {
            return Err(ActionError::InsufficientStamina {
                required: cost,
                available: self.stamina.current,
            });
        }
        self.stamina.deplete(cost);
        Ok(())
    }

    /// Bleeding tick: direct health loss that ignores armor.
    pub fn bleed(&mut self, amount: u32) -> DamageReport {
        let was_alive = self.is_alive();
        let effective = self.health.deplete(amount);
        let killed = was_alive && !self.is_alive();
        if killed {
            self.bleeding = false;
        }
        DamageReport { effective, killed }
    }

    /// Empties backpack and equipment slots.
    pub fn strip_gear(&mut self) -> Vec<Item> {
        let mut items = self.equipment.strip();
        items.extend(self.inventory.drain());
        items
    }

    /// Restores vitals after a raid ends.
    pub fn revive(&mut self, health: u32, stamina: u32) {
        self.health.set(health.max(1));
        self.stamina.set(stamina);
        self.bleeding = false;
    }

    pub fn health_status(&self) -> HealthStatus {
        HealthStatus::from_meter(&self.health)
    }

    pub fn stamina_status(&self) -> StaminaStatus {
        StaminaStatus::from_meter(&self.stamina)
    }

    /// Finds a carried or worn item by typed name, backpack first.
    pub fn find_owned(&self, query: &str) -> Result<&Item, ActionError> {
        let owned: Vec<&Item> = self
            .inventory
            .items()
            .iter()
            .chain(self.equipment.iter().map(|(_, item)| item))
            .collect();
        let index = super::resolve_name(owned.iter().map(|item| item.name()), query)?;
        Ok(owned[index])
    }
}

impl Combatant for Player {
    fn name(&self) -> &str {
        &self.name
    }

    fn health(&self) -> &ResourceMeter {
        &self.health
    }

    fn take_damage(&mut self, amount: u32, zone: HitZone) -> DamageReport {
        let defense = self.base_defense + self.equipment.defense(zone);
        let mut effective = damage::mitigate(amount, defense);
        if zone == HitZone::Head && !self.equipment.has_helmet() {
            effective = damage::player_unprotected_head(effective);
        }
        let was_alive = self.is_alive();
        let effective = self.health.deplete(effective);
        let killed = was_alive && !self.is_alive();
        if killed {
            self.bleeding = false;
        }
        DamageReport { effective, killed }
    }
}

impl Describe for Player {
    fn get_info(&self) -> String {
        let slot = |slot: EquipSlot| {
            self.equipment
                .get(slot)
                .map_or("None", |item| item.name())
                .to_owned()
        };
        format!(
            "{}: Health {} ({}), Stamina {} ({}), Weapon: {}, Armor: {}, Helmet: {}, Weight: {} / {}{}",
            self.name,
            self.health_status(),
            self.health.current,
            self.stamina_status(),
            self.stamina.current,
            slot(EquipSlot::Weapon),
            slot(EquipSlot::BodyArmor),
            slot(EquipSlot::Helmet),
            self.carried_weight(),
            self.capacity(),
            if self.bleeding { ", Bleeding" } else { "" },
        )
    }
}
