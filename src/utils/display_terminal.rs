//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 시작 과정에서 사용되는 터미널 출력 함수들을 제공합니다.
//! 박스 형태의 제목, 진행 단계 표시, 시작 요약을 시각적으로 표현합니다.

/// 박스 내부 콘텐츠 너비
const BOX_WIDTH: usize = 50;

/// 박스 형태로 둘러싸인 제목 문자열을 만듭니다.
///
/// 텍스트는 중앙 정렬됩니다.
///
/// Output:
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║               Credential Service                 ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn boxed_title(title: &str) -> String {
    let border = "═".repeat(BOX_WIDTH);
    format!(
        "╔{border}╗\n║{title:^width$}║\n╚{border}╝",
        border = border,
        title = title,
        width = BOX_WIDTH
    )
}

/// 박스 형태의 제목을 출력합니다.
pub fn print_boxed_title(title: &str) {
    println!("{}", boxed_title(title));
}

/// 진행 단계 시작을 표시합니다
///
/// ```text
/// → Step 1: 설정 로드
/// ```
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 진행 단계 완료를 표시합니다
pub fn print_step_complete(step: u8, description: &str) {
    println!("✓ Step {}: {}", step, description);
}

/// 서브 작업의 상태를 표시합니다
///
/// ```text
///    ├─ User Store: memory
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 서버 시작 요약을 출력합니다
///
/// 바인딩 주소와 노출되는 엔드포인트를 표시합니다.
pub fn print_startup_summary(bind_address: &str) {
    println!();
    print_boxed_title("🚀 CREDENTIAL SERVICE READY");
    println!("   🌐 Listening: http://{}", bind_address);
    println!("   💓 Health: http://{}/health", bind_address);
    println!("   🔐 Auth API: http://{}/api/v1/auth", bind_address);
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boxed_title_is_centered() {
        let rendered = boxed_title("abc");
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].chars().count(), BOX_WIDTH + 2);
        assert_eq!(lines[1].chars().count(), BOX_WIDTH + 2);
        assert!(lines[1].contains("abc"));
    }
}
