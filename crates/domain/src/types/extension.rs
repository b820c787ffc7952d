//! Vocabulary used by category-specific extension payloads

use super::vocabulary::define_vocabulary;

define_vocabulary! {
    /// Base effect of a potion
    PotionType {
        Water => "WATER",
        Regen => "REGEN",
        Speed => "SPEED",
        FireResistance => "FIRE_RESISTANCE",
        Poison => "POISON",
        InstantHeal => "INSTANT_HEAL",
        NightVision => "NIGHT_VISION",
        Weakness => "WEAKNESS",
        Strength => "STRENGTH",
        Slowness => "SLOWNESS",
        Jump => "JUMP",
        InstantDamage => "INSTANT_DAMAGE",
        WaterBreathing => "WATER_BREATHING",
        Invisibility => "INVISIBILITY",
    }
}

define_vocabulary! {
    /// Dye color used for banner bases and pattern layers
    DyeColor {
        White => "WHITE",
        Orange => "ORANGE",
        Magenta => "MAGENTA",
        LightBlue => "LIGHT_BLUE",
        Yellow => "YELLOW",
        Lime => "LIME",
        Pink => "PINK",
        Gray => "GRAY",
        Silver => "SILVER",
        Cyan => "CYAN",
        Purple => "PURPLE",
        Blue => "BLUE",
        Brown => "BROWN",
        Green => "GREEN",
        Red => "RED",
        Black => "BLACK",
    }
}

define_vocabulary! {
    /// Shape of a banner pattern layer
    PatternType {
        Base => "BASE",
        SquareBottomLeft => "SQUARE_BOTTOM_LEFT",
        SquareBottomRight => "SQUARE_BOTTOM_RIGHT",
        SquareTopLeft => "SQUARE_TOP_LEFT",
        SquareTopRight => "SQUARE_TOP_RIGHT",
        StripeBottom => "STRIPE_BOTTOM",
        StripeTop => "STRIPE_TOP",
        StripeLeft => "STRIPE_LEFT",
        StripeRight => "STRIPE_RIGHT",
        StripeCenter => "STRIPE_CENTER",
        StripeMiddle => "STRIPE_MIDDLE",
        StripeDownright => "STRIPE_DOWNRIGHT",
        StripeDownleft => "STRIPE_DOWNLEFT",
        Cross => "CROSS",
        StraightCross => "STRAIGHT_CROSS",
        TriangleBottom => "TRIANGLE_BOTTOM",
        TriangleTop => "TRIANGLE_TOP",
        Border => "BORDER",
        CurlyBorder => "CURLY_BORDER",
        Gradient => "GRADIENT",
        Bricks => "BRICKS",
        CircleMiddle => "CIRCLE_MIDDLE",
        RhombusMiddle => "RHOMBUS_MIDDLE",
        Creeper => "CREEPER",
        Skull => "SKULL",
        Flower => "FLOWER",
        Mojang => "MOJANG",
    }
}

define_vocabulary! {
    /// Burst shape of a firework effect
    FireworkEffectType {
        Ball => "BALL",
        BallLarge => "BALL_LARGE",
        Star => "STAR",
        Burst => "BURST",
        Creeper => "CREEPER",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn dye_color_parses_with_spaces() {
        assert_eq!(DyeColor::from_str("light blue").unwrap(), DyeColor::LightBlue);
    }

    #[test]
    fn pattern_type_display() {
        assert_eq!(PatternType::StripeCenter.to_string(), "STRIPE_CENTER");
    }

    #[test]
    fn same_name_in_different_vocabularies() {
        assert_eq!(PatternType::Creeper.as_str(), FireworkEffectType::Creeper.as_str());
    }

    #[test]
    fn potion_type_rejects_unknown() {
        assert!(PotionType::from_str("LUCK").is_err());
    }
}
