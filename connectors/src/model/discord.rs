use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct Widget {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub channels: Vec<Channel>,
    #[serde(default)]
    pub members: Vec<Member>,
    pub presence_count: Option<u64>,
}

impl Widget {
    /// Members currently connected to a voice channel.
    pub fn voice_members(&self) -> impl Iterator<Item = &Member> {
        self.members.iter().filter(|m| m.channel_id.is_some())
    }
}

impl PartialEq for Widget {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Widget {}

#[derive(Clone, Debug, Deserialize)]
pub struct Channel {
    pub id: String,
    pub name: String,
    pub position: i64,
}

impl PartialEq for Channel {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Channel {}

#[derive(Clone, Debug, Deserialize)]
pub struct Member {
    pub id: String,
    pub username: String,
    pub discriminator: Option<String>,
    pub avatar: Option<String>,
    pub avatar_url: Option<String>,
    pub status: MemberStatus,
    pub channel_id: Option<String>,
    #[serde(default)]
    pub deaf: bool,
    #[serde(default)]
    pub mute: bool,
    #[serde(default)]
    pub suppress: bool,
    #[serde(default)]
    pub self_deaf: bool,
    #[serde(default)]
    pub self_mute: bool,
}

impl PartialEq for Member {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Member {}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    Online,
    Idle,
    Dnd,
    /// Any status this version does not know about.
    #[serde(other)]
    Unknown,
}
