//! Built-in mock catalog used when no catalog file is configured.

use super::chat::{Chat, ChatRoom};
use super::city::{City, CityRegion};
use super::theater::{Theater, TheaterKind};
use chrono::{NaiveDate, NaiveDateTime};

fn city(name: &str, english_name: &str, explain: &str, region: CityRegion) -> City {
    City {
        name: name.to_string(),
        english_name: english_name.to_string(),
        explain: explain.to_string(),
        region,
    }
}

/// Popular cities, in the order the city screen lists them.
pub fn cities() -> Vec<City> {
    use CityRegion::*;
    vec![
        city("방콕", "Bangkok", "수완나품 공항, 카오산로드, 짜뚜짝 시장", Overseas),
        city("요코하마", "Yokohama", "미나토미라이, 차이나타운, 야마시타 공원", Overseas),
        city("오사카", "Osaka", "도톤보리, 오사카성, 유니버설 스튜디오", Overseas),
        city("부산", "Busan", "해운대, 광안리, 감천문화마을", Domestic),
        city("제주", "Jeju", "한라산, 성산일출봉, 협재 해수욕장", Domestic),
        city("서울", "Seoul", "경복궁, 남산타워, 한강 공원", Domestic),
        city("파리", "Paris", "에펠탑, 루브르 박물관, 몽마르트", Overseas),
        city("뉴욕", "New York", "타임스스퀘어, 센트럴파크, 브루클린 브릿지", Overseas),
        city("다낭", "Da Nang", "미케 해변, 바나힐, 오행산", Overseas),
        city("강릉", "Gangneung", "경포대, 안목 커피거리, 주문진", Domestic),
    ]
}

fn theater(kind: TheaterKind, location: &str, latitude: f64, longitude: f64) -> Theater {
    Theater {
        kind,
        location: location.to_string(),
        latitude,
        longitude,
    }
}

pub fn theaters() -> Vec<Theater> {
    use TheaterKind::*;
    vec![
        theater(LotteCinema, "롯데시네마 서울대입구", 37.4824, 126.9527),
        theater(LotteCinema, "롯데시네마 가산디지털", 37.4786, 126.8873),
        theater(LotteCinema, "롯데시네마 신도림", 37.5087, 126.8889),
        theater(Megabox, "메가박스 이수", 37.4857, 126.9822),
        theater(Megabox, "메가박스 신촌", 37.5596, 126.9425),
        theater(Megabox, "메가박스 상암월드컵경기장", 37.5686, 126.8979),
        theater(Cgv, "CGV 용산아이파크몰", 37.5297, 126.9647),
        theater(Cgv, "CGV 영등포", 37.5172, 126.9036),
        theater(Cgv, "CGV 여의도", 37.5254, 126.9256),
    ]
}

fn at(day: u32, hour: u32, minute: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(2024, 1, day)?.and_hms_opt(hour, minute, 0)
}

fn chat(user: &str, when: (u32, u32, u32), message: &str) -> Option<Chat> {
    let (day, hour, minute) = when;
    Some(Chat::new(user, at(day, hour, minute)?, message))
}

fn room(id: u32, name: &str, members: &[&str], chats: Vec<Option<Chat>>) -> ChatRoom {
    ChatRoom {
        id,
        name: name.to_string(),
        members: members.iter().map(|m| m.to_string()).collect(),
        chats: chats.into_iter().flatten().collect(),
    }
}

pub fn chat_rooms() -> Vec<ChatRoom> {
    vec![
        room(
            1,
            "Hue",
            &["Hue"],
            vec![
                chat("Hue", (11, 20, 2), "내일 영화 보러 갈래?"),
                chat("me", (11, 20, 5), "좋아, 어디서 볼까?"),
                chat("Hue", (12, 9, 41), "용산 CGV 어때"),
            ],
        ),
        room(
            2,
            "Jack",
            &["Jack"],
            vec![
                chat("Jack", (10, 13, 15), "사진 보내줄게"),
                chat("me", (10, 13, 20), "고마워!"),
            ],
        ),
        room(
            3,
            "여행 메이트",
            &["Bran", "Den", "Hue"],
            vec![
                chat("Bran", (12, 18, 0), "다음 주 일정 정리했어"),
                chat("Den", (13, 8, 30), "숙소 예약 완료"),
            ],
        ),
        room(
            4,
            "Bran",
            &["Bran"],
            vec![chat("Bran", (9, 22, 10), "잘 도착했어?")],
        ),
        room(5, "Den", &["Den"], Vec::new()),
    ]
}
