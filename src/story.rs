//! Localized narrative and interface text.
//!
//! Language selection only changes which strings the built-in catalog and the
//! adapters display; grid logic never looks at it.

/// Supported display languages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lang {
    #[default]
    En,
    Zh,
}

impl Lang {
    /// Maps a BCP-47 style tag (`"zh-CN"`, `"en_US"`, `"ZH"`) to a language.
    /// Anything unrecognised falls back to English.
    pub fn from_tag(tag: &str) -> Lang {
        let primary = tag
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "zh" => Lang::Zh,
            _ => Lang::En,
        }
    }

    pub fn story(self) -> &'static Story {
        match self {
            Lang::En => &EN,
            Lang::Zh => &ZH,
        }
    }
}

/// Per-level text: display name plus trigger lines keyed by `(x, y)`.
pub struct LevelText {
    pub name: &'static str,
    pub items: &'static [((i32, i32), &'static str)],
}

impl LevelText {
    pub fn item(&self, x: i32, y: i32) -> Option<&'static str> {
        self.items
            .iter()
            .find(|((ix, iy), _)| *ix == x && *iy == y)
            .map(|(_, text)| *text)
    }
}

pub struct Story {
    pub title: &'static str,
    pub description: &'static str,
    pub start_button: &'static str,
    pub controls: &'static str,
    pub intro: &'static str,
    pub death_overlap: &'static str,
    pub game_over_title: &'static str,
    pub retry_button: &'static str,
    pub victory_title: &'static str,
    pub victory_text: &'static [&'static str],
    pub next_hint: &'static str,
    pub level_prefix: &'static str,
    pub levels: &'static [LevelText],
}

impl Story {
    pub fn level(&self, idx: usize) -> Option<&LevelText> {
        self.levels.get(idx)
    }
}

pub static EN: Story = Story {
    title: "A Romantic Pursuit",
    description: "I am an artist pursuing the ultimate light. In this sleeping giant kingdom, \
        I am on a great expedition.\n\nMy soul jumps between three different planes: \
        Chaotic Reality, Holy High Heaven, and Deadly Abyss.\n\nNote: if you switch to a world \
        where an obstacle exists, your physical form will be destroyed by spatial overlap.",
    start_button: "Start Expedition",
    controls: "WASD: Move | 1/2/3: Switch Reality",
    intro: "Seeker: It's so dark around here... I can feel the Holy Light in the distance.",
    death_overlap: "Spatial Overlap: Your existence conflicted with the matter of this world.",
    game_over_title: "The Fall of a Seeker",
    retry_button: "Reshape Form (Retry)",
    victory_title: "Awakening",
    victory_text: &[
        "You rushed towards the \"Ultimate Light\" without hesitation. \"Zzzzt!\" Violent tremors \
         and burning sensations spread through your body, and then the whole world plunged into \
         complete darkness.",
        "A giant's curse rang out from above: \"What the hell? This broken bug zapper shorted \
         out? A moth actually broke the filament...\"",
        "You lie on the table, wings smoking, but feeling unprecedented satisfaction: you \
         extinguished the \"Sun\" with your own hands and became the only hero of this night.",
    ],
    next_hint: "[NEXT]",
    level_prefix: "LEVEL ",
    levels: &[
        LevelText {
            name: "Level 1: Giant's Labyrinth",
            items: &[(
                (4, 4),
                "Seeker: A dark lake exuding a sweet and dangerous scent. Mortals call it 'Sweet Temptation'.",
            )],
        },
        LevelText {
            name: "Level 2: Holy Stairs",
            items: &[(
                (5, 3),
                "Seeker: I feel the air heating up, it's the residual warmth of the Holy Light. I am approaching its outer ring.",
            )],
        },
        LevelText {
            name: "Level 3: Ultimate Baptism",
            items: &[
                (
                    (2, 4),
                    "Seeker: This is not an angel's feather... but the wreckage of a burnt wing. It seems a 'forerunner' fell here.",
                ),
                (
                    (5, 6),
                    "Seeker: A huge roar explodes in my ears... This is the choir of the Kingdom of God crowning me.",
                ),
            ],
        },
    ],
};

pub static ZH: Story = Story {
    title: "浪漫主义者的殉道",
    description: "我是一位追求极致光明的艺术家。在这个沉睡的巨大国度中，我正进行一场伟大的远征。\n\n\
        我的灵魂在三个不同的位面中跳跃：混乱的现实、圣洁的高天、以及致命的深渊。\n\n\
        注意：如果你切换到的世界在该位置有障碍物，你的肉身将因无法承载空间的重叠而毁灭。",
    start_button: "开启远征 (START)",
    controls: "WASD: 移动 | 1/2/3: 切换位面",
    intro: "追光者：四周如此昏暗……我能感觉到，圣光就在远处。",
    death_overlap: "空间重叠：你的存在与这个世界的物质发生了冲突。",
    game_over_title: "追求者的陨落",
    retry_button: "重塑形体 (RETRY)",
    victory_title: "大梦初醒",
    victory_text: &[
        "你义无反顾地冲向了那团“终极圣光”。“滋啦——！！！”剧烈的震动和焦灼感传遍全身，紧接着，整个世界陷入了彻底的黑暗。",
        "巨人的咒骂声在上方响起：“搞什么？这破灭蚊灯怎么短路了？竟然被一只飞蛾把灯丝给撞断了……”",
        "你躺在桌面上，虽然翅膀冒着烟，但你感到前所未有的满足：你亲手熄灭了“太阳”，成为了这个黑夜唯一的英雄。",
    ],
    next_hint: "[继续 / NEXT]",
    level_prefix: "LEVEL ",
    levels: &[
        LevelText {
            name: "Level 1: 巨人的迷宫",
            items: &[(
                (4, 4),
                "追光者：一潭深色的湖泊，散发着甜腻而危险的气息。凡人们称之为“甜蜜的诱惑”。",
            )],
        },
        LevelText {
            name: "Level 2: 圣洁的阶梯",
            items: &[(
                (5, 3),
                "追光者：我感觉到空气在发烫，那是圣光的余温。我正在接近它的外环。",
            )],
        },
        LevelText {
            name: "Level 3: 终极的洗礼",
            items: &[
                (
                    (2, 4),
                    "追光者：这不是天使的羽毛……而是一片被烧焦的翅膀残骸。看来曾有‘先行者’在此陨落。",
                ),
                (
                    (5, 6),
                    "追光者：巨大的轰鸣声在耳边炸响……这是神之国的唱诗班在为我加冕。",
                ),
            ],
        },
    ],
};
