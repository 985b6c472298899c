use serde::Serialize;
use std::net::Ipv4Addr;

/// クラスフルアドレッシングのアドレスクラス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NetworkClass {
    A,
    B,
    C,
    D,
    E,
}

impl NetworkClass {
    /// 第1オクテットの値からクラスを判定する。
    /// 境界は127/191/223/239で、いずれも上限側を含む。
    pub fn of(addr: Ipv4Addr) -> Self {
        match addr.octets()[0] {
            0..=127 => NetworkClass::A,
            128..=191 => NetworkClass::B,
            192..=223 => NetworkClass::C,
            224..=239 => NetworkClass::D,
            _ => NetworkClass::E,
        }
    }

    /// クラス標準のプレフィックス長。
    /// D/Eにクラスフルの標準マスクは定義されないため、計算を成立させる代替値として/32を返す。
    pub fn default_prefix_len(self) -> u8 {
        match self {
            NetworkClass::A => 8,
            NetworkClass::B => 16,
            NetworkClass::C => 24,
            NetworkClass::D | NetworkClass::E => 32,
        }
    }

    /// クラス標準のサブネットマスク
    pub fn default_mask(self) -> Ipv4Addr {
        match self {
            NetworkClass::A => Ipv4Addr::new(255, 0, 0, 0),
            NetworkClass::B => Ipv4Addr::new(255, 255, 0, 0),
            NetworkClass::C => Ipv4Addr::new(255, 255, 255, 0),
            NetworkClass::D | NetworkClass::E => Ipv4Addr::new(255, 255, 255, 255),
        }
    }

    /// レポートやエラーメッセージで使うラベル用
    pub fn as_str(self) -> &'static str {
        match self {
            NetworkClass::A => "A",
            NetworkClass::B => "B",
            NetworkClass::C => "C",
            NetworkClass::D => "D",
            NetworkClass::E => "E",
        }
    }
}
