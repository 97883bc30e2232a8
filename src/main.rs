fn main() {
    helpdesk_pwa::start();
}
